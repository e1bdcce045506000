//! Rule-based line classifiers for price lists.

pub mod patterns;
pub mod price;
pub mod units;

pub use price::{extract_price, PriceExtractor, PriceMatch};
pub use units::{extract_unit, UnitExtractor, UnitMatch};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// A matched value together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// A line carrying both a pack size and a price.
///
/// Both matches keep their byte range within the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLine {
    pub unit: ExtractionMatch<UnitMatch>,
    pub price: ExtractionMatch<PriceMatch>,
}

impl CandidateLine {
    /// Byte offset of the pack size within the line.
    pub fn unit_start(&self) -> usize {
        self.unit.position.map_or(0, |(start, _)| start)
    }
}

/// Classify a single line.
///
/// Returns `None` unless the line has a pack size and, separately from it, a
/// price. Only the first of each is considered.
pub fn classify_line(text: &str) -> Option<CandidateLine> {
    let unit = UnitExtractor::new().extract(text)?;
    let span = unit.position.unwrap_or((0, 0));
    let price = PriceExtractor::new().extract_outside(text, span)?;

    Some(CandidateLine { unit, price })
}
