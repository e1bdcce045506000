//! Request boundary for price-list extraction.
//!
//! Front ends (CLI, WASM, an HTTP handler) hand over a JSON body of the shape
//! `{ "text": ..., "fileName": ..., "bytesBase64": ... }` and get back either a
//! bare JSON array of records or `{ "error": ... }` with a status class.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

use crate::error::RequestError;
use crate::extract::{ItemExtractor, PricelistExtractor};
use crate::models::config::PricelistConfig;
use crate::models::item::ExtractedItem;
use crate::pdf::{PdfExtractor, PdfKind};

/// Body of an extraction request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricelistRequest {
    /// Text already extracted from the document.
    #[serde(default, deserialize_with = "string_or_none")]
    pub text: Option<String>,

    /// Name of the uploaded document, used as the vendor hint.
    #[serde(default, deserialize_with = "string_or_none")]
    pub file_name: Option<String>,

    /// Raw document bytes, base64-encoded.
    #[serde(default, deserialize_with = "string_or_none")]
    pub bytes_base64: Option<String>,
}

/// Non-string JSON values count as absent.
fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

impl PricelistRequest {
    /// Request carrying text only.
    pub fn from_text(text: impl Into<String>, file_name: Option<&str>) -> Self {
        Self {
            text: Some(text.into()),
            file_name: file_name.map(str::to_string),
            bytes_base64: None,
        }
    }

    /// Request carrying raw document bytes.
    pub fn from_bytes(data: &[u8], file_name: Option<&str>) -> Self {
        Self {
            text: None,
            file_name: file_name.map(str::to_string),
            bytes_base64: Some(STANDARD.encode(data)),
        }
    }

    fn text_len(&self) -> usize {
        self.text.as_deref().map_or(0, |t| t.trim().chars().count())
    }

    fn has_bytes(&self) -> bool {
        self.bytes_base64.as_deref().is_some_and(|b| !b.is_empty())
    }

    /// Check the input precondition.
    ///
    /// Fails when the text is shorter than `min_text_length` and no document
    /// bytes were supplied.
    pub fn validate(&self, min_text_length: usize) -> Result<(), RequestError> {
        if self.text_len() < min_text_length && !self.has_bytes() {
            return Err(RequestError::MissingInput);
        }
        Ok(())
    }

    /// Text to run the extractor on.
    ///
    /// Supplied text wins when it is long enough; otherwise the document bytes
    /// are decoded and their text is used.
    pub fn resolve_text(&self, config: &PricelistConfig) -> Result<String, RequestError> {
        self.validate(config.request.min_text_length)?;

        let text = self.text.clone().unwrap_or_default();
        if self.text_len() >= config.request.min_text_length {
            return Ok(text);
        }

        let encoded = self.bytes_base64.as_deref().unwrap_or_default();
        let data = STANDARD
            .decode(encoded.trim())
            .map_err(|e| RequestError::InvalidBase64(e.to_string()))?;

        let content = PdfExtractor::from_bytes(&data)?.extract_all(config.pdf.min_text_length)?;
        if content.kind == PdfKind::Empty {
            warn!(
                "Document has {} pages but almost no text ({} chars)",
                content.page_count,
                content.text.trim().len()
            );
        }

        Ok(content.text)
    }
}

/// Run a request through the extractor.
pub fn handle(
    request: &PricelistRequest,
    config: &PricelistConfig,
) -> Result<Vec<ExtractedItem>, RequestError> {
    let text = request.resolve_text(config)?;
    let extractor = PricelistExtractor::from_config(&config.extraction);
    let items = extractor.extract(&text, request.file_name.as_deref());

    info!(
        "Extracted {} records from {} characters (file: {})",
        items.len(),
        text.len(),
        request.file_name.as_deref().unwrap_or("-")
    );

    Ok(items)
}

/// Status class of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    /// The caller sent something unusable.
    ClientError,
    /// Something failed while processing a valid request.
    ServerError,
}

impl ErrorStatus {
    /// HTTP status code for this class.
    pub fn code(&self) -> u16 {
        match self {
            ErrorStatus::ClientError => 400,
            ErrorStatus::ServerError => 500,
        }
    }
}

impl RequestError {
    pub fn status(&self) -> ErrorStatus {
        match self {
            RequestError::InvalidBody(_)
            | RequestError::MissingInput
            | RequestError::InvalidBase64(_) => ErrorStatus::ClientError,
            RequestError::Pdf(_) | RequestError::Encode(_) => ErrorStatus::ServerError,
        }
    }
}

/// JSON error shape returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&RequestError> for ErrorBody {
    fn from(err: &RequestError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Status code and JSON body for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryResponse {
    pub status: u16,
    pub body: String,
}

impl BoundaryResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    fn error(err: &RequestError) -> Self {
        let body = serde_json::to_string(&ErrorBody::from(err))
            .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string());
        Self {
            status: err.status().code(),
            body,
        }
    }
}

/// Full boundary: parse a JSON body, extract, encode the answer.
///
/// Records never leak internal keys; the success body is a bare array.
pub fn handle_json(body: &str, config: &PricelistConfig) -> BoundaryResponse {
    let result = serde_json::from_str::<PricelistRequest>(body)
        .map_err(|e| RequestError::InvalidBody(e.to_string()))
        .and_then(|request| handle(&request, config))
        .and_then(|items| {
            serde_json::to_string(&items).map_err(|e| RequestError::Encode(e.to_string()))
        });

    match result {
        Ok(body) => BoundaryResponse { status: 200, body },
        Err(err) => {
            warn!("Request failed: {}", err);
            BoundaryResponse::error(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "Sodium Chloride AR\n\
                          CAT NO: SC-101   500 gm   1250.00\n\
                          Potassium Nitrate AR\n\
                          1 kg  980";

    #[test]
    fn test_request_json_shape() {
        let request: PricelistRequest = serde_json::from_str(
            r#"{ "text": "abc", "fileName": "cdh.pdf", "bytesBase64": "" }"#,
        )
        .unwrap();
        assert_eq!(request.text.as_deref(), Some("abc"));
        assert_eq!(request.file_name.as_deref(), Some("cdh.pdf"));
        assert_eq!(request.bytes_base64.as_deref(), Some(""));
    }

    #[test]
    fn test_non_string_text_is_absent() {
        let request: PricelistRequest =
            serde_json::from_str(r#"{ "text": 42, "fileName": null }"#).unwrap();
        assert!(request.text.is_none());
        assert!(request.file_name.is_none());
    }

    #[test]
    fn test_short_text_without_bytes_is_rejected() {
        let request = PricelistRequest::from_text("500 gm 120", None);
        let err = request.validate(50).unwrap_err();
        assert!(matches!(err, RequestError::MissingInput));
        assert_eq!(err.status(), ErrorStatus::ClientError);

        let request = PricelistRequest {
            bytes_base64: Some(String::new()),
            ..PricelistRequest::from_text("   ", None)
        };
        assert!(request.validate(50).is_err());
    }

    #[test]
    fn test_handle_text_request() {
        let request = PricelistRequest::from_text(SAMPLE, Some("CDH-pricelist-2024.pdf"));
        let items = handle(&request, &PricelistConfig::default()).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item, "Sodium Chloride AR");
        assert_eq!(items[1].make.as_deref(), Some("CDH"));
    }

    #[test]
    fn test_handle_json_success() {
        let body = serde_json::json!({ "text": SAMPLE }).to_string();
        let response = handle_json(&body, &PricelistConfig::default());

        assert!(response.is_success());
        assert_eq!(
            response.body,
            r#"[{"item":"Sodium Chloride AR","unit":"500 gm","mrp":1250},{"item":"Potassium Nitrate AR","unit":"1 kg","mrp":980}]"#
        );
    }

    #[test]
    fn test_handle_json_missing_input() {
        let response = handle_json(r#"{ "text": "too short" }"#, &PricelistConfig::default());
        assert_eq!(response.status, 400);
        assert_eq!(response.body, r#"{"error":"No text/bytes provided"}"#);
    }

    #[test]
    fn test_handle_json_invalid_body() {
        let response = handle_json("not json", &PricelistConfig::default());
        assert_eq!(response.status, 400);
    }

    #[test]
    fn test_invalid_base64_is_client_error() {
        let request = PricelistRequest {
            bytes_base64: Some("@@@not base64@@@".to_string()),
            ..Default::default()
        };
        let err = handle(&request, &PricelistConfig::default()).unwrap_err();
        assert!(matches!(err, RequestError::InvalidBase64(_)));
        assert_eq!(err.status().code(), 400);
    }

    #[test]
    fn test_unreadable_document_is_server_error() {
        let request = PricelistRequest::from_bytes(b"plain text, not a pdf", Some("bb.pdf"));
        let err = handle(&request, &PricelistConfig::default()).unwrap_err();
        assert!(matches!(err, RequestError::Pdf(_)));
        assert_eq!(err.status(), ErrorStatus::ServerError);

        let body = ErrorBody::from(&err);
        assert!(body.error.starts_with("failed to parse PDF"));
    }
}
