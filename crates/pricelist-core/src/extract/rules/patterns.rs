//! Common regex patterns for price-list line classification.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Pack size: up to 3 integer digits, optional fraction, optional single space, unit word
    pub static ref UNIT_PATTERN: Regex = Regex::new(
        r"(?i)\b([0-9]{1,3}(?:\.[0-9]+)?)\s?(gm|g|kg|ml|ltr|l)\b"
    ).unwrap();

    // Price: 2-6 digit number with an optional 1-2 digit fraction, whole word
    pub static ref PRICE_PATTERN: Regex = Regex::new(
        r"\b([0-9]{2,6}(?:\.[0-9]{1,2})?)\b"
    ).unwrap();

    // Column headers and catalogue metadata that end an item name
    pub static ref NOISE_KEYWORDS: Regex = Regex::new(
        r"(?i)\b(HSN|GST|CAS|CAT|CODE|Product|Price|Rate|UNIT|ITEM)\b"
    ).unwrap();

    // Column separator artifact left by text extraction
    pub static ref COLUMN_GAP: Regex = Regex::new(r"\s{2,}").unwrap();
}
