//! Offline price-list extraction.
//!
//! Turns line-oriented text, as produced by PDF text extraction, into product
//! records without calling any external model. The pipeline is a single pass:
//!
//! 1. [`lines`] splits and trims the input.
//! 2. [`rules`] classifies each line by its pack size and price.
//! 3. [`name`] rebuilds the item name from neighbouring lines.
//! 4. [`dedup`] drops repeated records.
//! 5. [`vendor`] fills in the vendor from the file name.

pub mod dedup;
mod extractor;
pub mod lines;
pub mod name;
pub mod rules;
pub mod vendor;

pub use extractor::PricelistExtractor;

use crate::models::item::ExtractedItem;

/// Trait for price-list extractors.
pub trait ItemExtractor {
    /// Extract product records from text.
    ///
    /// `file_name_hint` is the source document's name, used only to infer
    /// the vendor.
    fn extract(&self, text: &str, file_name_hint: Option<&str>) -> Vec<ExtractedItem>;
}

/// Extract records with the default settings.
pub fn extract(text: &str, file_name_hint: Option<&str>) -> Vec<ExtractedItem> {
    PricelistExtractor::new().extract(text, file_name_hint)
}
