//! Pack-size extraction (quantity followed by a unit symbol).

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::UNIT_PATTERN;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::item::UnitSymbol;

/// A pack size found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitMatch {
    /// Parsed quantity.
    pub quantity: Decimal,
    /// Parsed unit symbol.
    pub symbol: UnitSymbol,
    /// Quantity exactly as written.
    pub quantity_text: String,
    /// Symbol exactly as written (original case).
    pub symbol_text: String,
}

impl UnitMatch {
    /// Label used in output records, e.g. `"500 gm"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.quantity_text, self.symbol_text)
    }
}

/// Pack-size field extractor.
pub struct UnitExtractor;

impl UnitExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnitExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for UnitExtractor {
    type Output = ExtractionMatch<UnitMatch>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        // Only the first pack size counts; a bad first match is not retried further on.
        let caps = UNIT_PATTERN.captures(text)?;
        parse_unit(&caps)
    }
}

fn parse_unit(caps: &regex::Captures<'_>) -> Option<ExtractionMatch<UnitMatch>> {
    let full_match = caps.get(0)?;
    let quantity_text = &caps[1];
    let symbol_text = &caps[2];

    let quantity = Decimal::from_str(quantity_text).ok()?;
    let symbol = UnitSymbol::from_str(symbol_text)?;

    let unit = UnitMatch {
        quantity,
        symbol,
        quantity_text: quantity_text.to_string(),
        symbol_text: symbol_text.to_string(),
    };

    Some(ExtractionMatch::new(unit, full_match.as_str()).with_position(full_match.start(), full_match.end()))
}

/// Find the first pack size on a line.
pub fn extract_unit(text: &str) -> Option<ExtractionMatch<UnitMatch>> {
    UnitExtractor::new().extract(text)
}
