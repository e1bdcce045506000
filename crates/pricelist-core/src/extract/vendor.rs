//! Vendor inference from a document's file name.

use crate::models::config::VendorHint;
use crate::models::item::ExtractedItem;

/// Vendor named by the first hint whose pattern occurs in `file_name`.
///
/// Matching is case-insensitive on the file name; rules are checked in order.
pub fn infer_vendor<'a>(file_name: Option<&str>, hints: &'a [VendorHint]) -> Option<&'a str> {
    let file_name = file_name?.to_lowercase();
    hints
        .iter()
        .find(|hint| file_name.contains(&hint.pattern.to_lowercase()))
        .map(|hint| hint.make.as_str())
}

/// Fill in `make` on every record that does not have one yet.
pub fn apply_vendor(items: &mut [ExtractedItem], make: &str) {
    for item in items.iter_mut().filter(|item| item.make.is_none()) {
        item.make = Some(make.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::ExtractionConfig;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_infer_vendor() {
        let hints = ExtractionConfig::default().vendor_hints;

        assert_eq!(infer_vendor(Some("CDH-pricelist-2024.pdf"), &hints), Some("CDH"));
        assert_eq!(infer_vendor(Some("BB_chem_rates.pdf"), &hints), Some("BBChem"));
        assert_eq!(infer_vendor(Some("cdh_and_bb.pdf"), &hints), Some("CDH"));
        assert_eq!(infer_vendor(Some("sigma.pdf"), &hints), None);
        assert_eq!(infer_vendor(None, &hints), None);
    }

    #[test]
    fn test_apply_vendor_keeps_existing_make() {
        let mut items = vec![
            ExtractedItem::new("Urea", "1 kg", Decimal::from(980)),
            ExtractedItem::new("Borax", "500 gm", Decimal::from(120)).with_make("Loba"),
        ];
        apply_vendor(&mut items, "CDH");

        assert_eq!(items[0].make.as_deref(), Some("CDH"));
        assert_eq!(items[1].make.as_deref(), Some("Loba"));
    }
}
