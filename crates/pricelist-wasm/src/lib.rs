//! WASM bindings for offline price-list extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use pricelist_core::extract::{ItemExtractor, PricelistExtractor};
use pricelist_core::models::config::PricelistConfig;
use pricelist_core::request::handle_json;
use pricelist_core::ExtractedItem;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js(items: &[ExtractedItem]) -> Result<JsValue, JsValue> {
    // Prices as plain numbers, not BigInt
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    items
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract price-list records from text.
///
/// Takes text already pulled out of a price-list document and an optional
/// file name used for vendor inference. Returns an array of
/// `{ item, unit, mrp, make? }`.
#[wasm_bindgen]
pub fn extract_pricelist(text: &str, file_name: Option<String>) -> Result<JsValue, JsValue> {
    let items = PricelistExtractor::new().extract(text, file_name.as_deref());
    to_js(&items)
}

/// Run a JSON request body (`{ text, fileName, bytesBase64 }`) through the
/// extraction boundary.
///
/// Returns `{ status, body }` where `body` is the JSON response text.
#[wasm_bindgen]
pub fn handle_request(body: &str) -> Result<JsValue, JsValue> {
    #[derive(Serialize)]
    struct Response {
        status: u16,
        body: String,
    }

    let response = handle_json(body, &PricelistConfig::default());
    let output = Response {
        status: response.status,
        body: response.body,
    };

    serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Price-list extractor class for browser use.
#[wasm_bindgen(js_name = PricelistExtractor)]
pub struct PricelistExtractorJs {
    extractor: PricelistExtractor,
}

#[wasm_bindgen(js_class = PricelistExtractor)]
impl PricelistExtractorJs {
    /// Create a new extractor with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            extractor: PricelistExtractor::new(),
        }
    }

    /// Cap the number of records returned.
    #[wasm_bindgen]
    pub fn set_max_items(&mut self, max_items: usize) {
        self.extractor = self.extractor.clone().with_max_items(max_items);
    }

    /// Extract records from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str, file_name: Option<String>) -> Result<JsValue, JsValue> {
        let items = self.extractor.extract(text, file_name.as_deref());
        to_js(&items)
    }

    /// Extract records and return them as a JSON string.
    #[wasm_bindgen]
    pub fn extract_json(&self, text: &str, file_name: Option<String>) -> Result<String, JsValue> {
        let items = self.extractor.extract(text, file_name.as_deref());
        serde_json::to_string(&items).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for PricelistExtractorJs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const SAMPLE: &str = "Sodium Chloride AR\nCAT NO: SC-101   500 gm   1250.00\nPotassium Nitrate AR\n1 kg  980";

    #[wasm_bindgen_test]
    fn test_extract_json() {
        let extractor = PricelistExtractorJs::new();
        let json = extractor.extract_json(SAMPLE, Some("cdh.pdf".to_string())).unwrap();
        assert!(json.contains(r#""make":"CDH""#));
    }

    #[wasm_bindgen_test]
    fn test_max_items() {
        let mut extractor = PricelistExtractorJs::new();
        extractor.set_max_items(1);
        let json = extractor.extract_json(SAMPLE, None).unwrap();
        assert_eq!(json, r#"[{"item":"Sodium Chloride AR","unit":"500 gm","mrp":1250}]"#);
    }

    #[wasm_bindgen_test]
    fn test_handle_request_rejects_short_text() {
        let value = handle_request(r#"{ "text": "short" }"#).unwrap();
        let status = js_sys::Reflect::get(&value, &JsValue::from_str("status")).unwrap();
        assert_eq!(status.as_f64(), Some(400.0));
    }
}
