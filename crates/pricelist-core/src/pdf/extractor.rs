//! PDF text extraction using lopdf and pdf-extract.

use std::panic::{self, UnwindSafe};

use lopdf::Document;
use tracing::debug;

use super::{PdfKind, PdfProcessor, Result};
use crate::error::PdfError;

/// PDF text extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Type of PDF content.
    pub kind: PdfKind,
    /// Extracted text (may be empty).
    pub text: String,
    /// Number of pages.
    pub page_count: u32,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Create an extractor with a document already loaded.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut extractor = Self::new();
        extractor.load(data)?;
        Ok(extractor)
    }

    /// Extract all text and classify the document.
    pub fn extract_all(&self, min_text_length: usize) -> Result<PdfContent> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        let text = self.extract_text()?;
        let kind = PdfKind::classify(&text, min_text_length);
        let page_count = self.page_count();

        debug!(
            "PDF analysis: {} pages, {} chars text -> {:?}",
            page_count,
            text.len(),
            kind
        );

        Ok(PdfContent {
            kind,
            text,
            page_count,
        })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract needs the decrypted bytes
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        if self.raw_data.is_empty() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }
        let data = &self.raw_data;
        catch_panic(|| pdf_extract::extract_text_from_mem(data))?
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

/// Run `f`, turning a panic into a text extraction error.
///
/// pdf-extract panics on some malformed fonts and content streams.
fn catch_panic<T>(f: impl FnOnce() -> T + UnwindSafe) -> Result<T> {
    panic::catch_unwind(f).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        PdfError::TextExtraction(message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert!(extractor.extract_text().is_err());
        assert!(extractor.extract_all(50).is_err());
    }

    #[test]
    fn test_panic_becomes_extraction_error() {
        let result: Result<()> = catch_panic(|| panic!("bad font widths"));
        match result {
            Err(PdfError::TextExtraction(message)) => assert_eq!(message, "bad font widths"),
            other => panic!("unexpected result: {:?}", other),
        }

        assert_eq!(catch_panic(|| 7).unwrap(), 7);
    }

    #[test]
    fn test_classify_kind() {
        assert_eq!(PdfKind::classify("   ", 1), PdfKind::Empty);
        assert_eq!(PdfKind::classify("Urea 1 kg 980", 10), PdfKind::Text);
        assert_eq!(PdfKind::classify("Urea 1 kg 980", 50), PdfKind::Empty);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let result = PdfExtractor::from_bytes(b"definitely not a pdf");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }
}
