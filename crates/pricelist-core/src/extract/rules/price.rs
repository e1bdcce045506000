//! Price (MRP) extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::PRICE_PATTERN;
use super::{ExtractionMatch, FieldExtractor};

/// A price found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceMatch {
    pub amount: Decimal,
}

/// Price field extractor.
///
/// Currency marks and punctuation around the number are fine (`Rs.450`,
/// `450/-`, `MRP:450`). Numbers hyphen-joined to a code (`SC-101`) or
/// glued to another number (`1,250`) are not prices.
pub struct PriceExtractor;

impl PriceExtractor {
    pub fn new() -> Self {
        Self
    }

    /// First price on the line that does not fall inside `span`.
    ///
    /// Used to keep the pack-size quantity from being read as the price.
    pub fn extract_outside(&self, text: &str, span: (usize, usize)) -> Option<ExtractionMatch<PriceMatch>> {
        let (start, end) = span;
        PRICE_PATTERN
            .find_iter(text)
            .filter(|m| m.end() <= start || m.start() >= end)
            .find(|m| !is_joined(text, m.start(), m.end()))
            .and_then(parse_price)
    }
}

impl Default for PriceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PriceExtractor {
    type Output = ExtractionMatch<PriceMatch>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_outside(text, (0, 0))
    }
}

/// Whether the number at `start..end` is part of a larger token.
fn is_joined(text: &str, start: usize, end: usize) -> bool {
    let mut before = text[..start].chars().rev();
    let joined_before = match (before.next(), before.next()) {
        (Some('-'), _) => true,
        (Some('.' | ','), Some(c)) => c.is_ascii_digit(),
        _ => false,
    };

    let mut after = text[end..].chars();
    let joined_after = match (after.next(), after.next()) {
        (Some('-'), Some(c)) => c.is_alphanumeric(),
        (Some('.' | ','), Some(c)) => c.is_ascii_digit(),
        _ => false,
    };

    joined_before || joined_after
}

fn parse_price(token: regex::Match<'_>) -> Option<ExtractionMatch<PriceMatch>> {
    let amount = Decimal::from_str(token.as_str()).ok()?;

    Some(
        ExtractionMatch::new(PriceMatch { amount: amount.normalize() }, token.as_str())
            .with_position(token.start(), token.end()),
    )
}

/// Find the first price on a line.
pub fn extract_price(text: &str) -> Option<ExtractionMatch<PriceMatch>> {
    PriceExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_price() {
        let m = extract_price("1 kg  980").unwrap();
        assert_eq!(m.value.amount, Decimal::from(980));
        assert_eq!(m.position, Some((6, 9)));
    }

    #[test]
    fn test_fraction_is_normalized() {
        let m = extract_price("MRP 1250.00").unwrap();
        assert_eq!(m.value.amount.to_string(), "1250");

        let m = extract_price("MRP 99.5").unwrap();
        assert_eq!(m.value.amount.to_string(), "99.5");
    }

    #[test]
    fn test_decorated_prices() {
        for line in ["Rs.450", "450/-", "MRP:450", "450, ex-works", "Rs. 450.00/-"] {
            let m = extract_price(line).unwrap();
            assert_eq!(m.value.amount, Decimal::from(450), "{}", line);
        }
    }

    #[test]
    fn test_joined_numbers_are_not_prices() {
        assert!(extract_price("SC-101 1,250 1250.005 1234567 7 101-A").is_none());
        assert_eq!(
            extract_price("CAT SC-101 Rs.450").unwrap().value.amount,
            Decimal::from(450)
        );
    }

    #[test]
    fn test_first_price_wins() {
        let m = PriceExtractor::new().extract("MRP 1250 offer 999").unwrap();
        assert_eq!(m.value.amount, Decimal::from(1250));
    }

    #[test]
    fn test_extract_outside_skips_span() {
        let text = "CAT NO: SC-101   500 gm   1250.00";
        let extractor = PriceExtractor::new();

        assert_eq!(extractor.extract(text).unwrap().value.amount, Decimal::from(500));

        let m = extractor.extract_outside(text, (17, 23)).unwrap();
        assert_eq!(m.value.amount, Decimal::from(1250));
        assert_eq!(m.source, "1250.00");
    }
}
