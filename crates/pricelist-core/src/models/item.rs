//! Price-list record models.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

/// A single product row recovered from a price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedItem {
    /// Display name rebuilt from the lines around the matched row.
    pub item: String,

    /// Pack size as `"<quantity> <symbol>"`, spelled as in the source (e.g. `"500 gm"`).
    pub unit: String,

    /// Maximum retail price for one pack.
    #[serde(serialize_with = "serialize_mrp")]
    pub mrp: Decimal,

    /// Vendor/brand, when one could be inferred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
}

impl ExtractedItem {
    /// Create a record without a vendor.
    pub fn new(item: impl Into<String>, unit: impl Into<String>, mrp: Decimal) -> Self {
        Self {
            item: item.into(),
            unit: unit.into(),
            mrp: mrp.normalize(),
            make: None,
        }
    }

    /// Set the vendor.
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    /// Key under which two records count as the same product.
    ///
    /// Case-insensitive on name and unit; the price compares by value, so
    /// `1250.00` and `1250` collide.
    pub fn dedup_key(&self) -> String {
        format!(
            "{}{}{}",
            self.item.to_lowercase(),
            self.unit.to_lowercase(),
            self.mrp.normalize()
        )
    }
}

/// Prices go out as JSON numbers; whole amounts carry no fraction.
fn serialize_mrp<S>(mrp: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let normalized = mrp.normalize();
    if normalized.scale() == 0 {
        if let Some(whole) = normalized.to_u64() {
            return serializer.serialize_u64(whole);
        }
    }
    match normalized.to_f64() {
        Some(value) => serializer.serialize_f64(value),
        None => serializer.serialize_str(&normalized.to_string()),
    }
}

/// Pack-size unit symbols recognised in price lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSymbol {
    /// Grams, written `gm`.
    Gm,
    /// Grams, written `g`.
    G,
    /// Kilograms.
    Kg,
    /// Millilitres.
    Ml,
    /// Litres, written `ltr`.
    Ltr,
    /// Litres, written `l`.
    L,
}

impl UnitSymbol {
    /// Parse a unit symbol, ignoring case.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gm" => Some(UnitSymbol::Gm),
            "g" => Some(UnitSymbol::G),
            "kg" => Some(UnitSymbol::Kg),
            "ml" => Some(UnitSymbol::Ml),
            "ltr" => Some(UnitSymbol::Ltr),
            "l" => Some(UnitSymbol::L),
            _ => None,
        }
    }

    /// Canonical lowercase spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSymbol::Gm => "gm",
            UnitSymbol::G => "g",
            UnitSymbol::Kg => "kg",
            UnitSymbol::Ml => "ml",
            UnitSymbol::Ltr => "ltr",
            UnitSymbol::L => "l",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_unit_symbol_parsing() {
        assert_eq!(UnitSymbol::from_str("GM"), Some(UnitSymbol::Gm));
        assert_eq!(UnitSymbol::from_str("Ltr"), Some(UnitSymbol::Ltr));
        assert_eq!(UnitSymbol::from_str("l"), Some(UnitSymbol::L));
        assert_eq!(UnitSymbol::from_str("lb"), None);
        assert_eq!(UnitSymbol::from_str("KG").map(|u| u.as_str()), Some("kg"));
    }

    #[test]
    fn test_mrp_serializes_as_number() {
        let item = ExtractedItem::new("Sodium Chloride AR", "500 gm", Decimal::from_str("1250.00").unwrap());
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"item":"Sodium Chloride AR","unit":"500 gm","mrp":1250}"#
        );

        let item = ExtractedItem::new("Urea", "1 kg", Decimal::from_str("99.50").unwrap());
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({ "item": "Urea", "unit": "1 kg", "mrp": 99.5 })
        );
    }

    #[test]
    fn test_make_is_serialized_when_present() {
        let item = ExtractedItem::new("Urea", "1 kg", Decimal::from(980)).with_make("CDH");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["make"], "CDH");
    }

    #[test]
    fn test_deserialize_from_json_number() {
        let item: ExtractedItem =
            serde_json::from_str(r#"{"item":"Urea","unit":"1 kg","mrp":980}"#).unwrap();
        assert_eq!(item.mrp, Decimal::from(980));
        assert_eq!(item.make, None);
    }

    #[test]
    fn test_dedup_key_ignores_case_and_scale() {
        let a = ExtractedItem::new("Urea AR", "1 KG", Decimal::from_str("980.00").unwrap());
        let b = ExtractedItem::new("UREA ar", "1 kg", Decimal::from(980));
        assert_eq!(a.dedup_key(), b.dedup_key());
        assert_eq!(a.dedup_key(), "urea ar1 kg980");
    }
}
