//! PDF processing module.
//!
//! Turns a price-list document into the plain text the extractor works on.

mod extractor;

pub use extractor::{PdfExtractor, PdfContent};

use crate::error::PdfError;

/// Type of PDF content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfKind {
    /// Contains extractable text.
    Text,
    /// No usable text (scanned or blank).
    Empty,
}

impl PdfKind {
    /// Classify extracted text by how much of it there is.
    pub fn classify(text: &str, min_text_length: usize) -> Self {
        if text.trim().chars().count() >= min_text_length {
            PdfKind::Text
        } else {
            PdfKind::Empty
        }
    }
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;
}
