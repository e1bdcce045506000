//! Stable, single-pass record deduplication.

use std::collections::HashSet;

use crate::models::item::ExtractedItem;

/// Collects records in emission order, dropping repeats of an earlier record.
#[derive(Debug, Default)]
pub struct RecordDeduplicator {
    seen: HashSet<String>,
    items: Vec<ExtractedItem>,
}

impl RecordDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` unless its dedup key was seen before.
    ///
    /// Returns whether the record was accepted.
    pub fn push(&mut self, item: ExtractedItem) -> bool {
        if !self.seen.insert(item.dedup_key()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Number of accepted records.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn into_items(self) -> Vec<ExtractedItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_first_occurrence_wins() {
        let mut dedup = RecordDeduplicator::new();
        assert!(dedup.push(ExtractedItem::new("Urea", "1 kg", Decimal::from(980))));
        assert!(dedup.push(ExtractedItem::new("Borax", "500 gm", Decimal::from(120))));
        assert!(!dedup.push(ExtractedItem::new("UREA", "1 KG", Decimal::new(98000, 2))));
        assert!(dedup.push(ExtractedItem::new("Urea", "1 kg", Decimal::from(990))));
        assert_eq!(dedup.count(), 3);

        let items = dedup.into_items();
        let names: Vec<&str> = items.iter().map(|i| i.item.as_str()).collect();
        assert_eq!(names, vec!["Urea", "Borax", "Urea"]);
        assert_eq!(items[2].mrp, Decimal::from(990));
    }
}
