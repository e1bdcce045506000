//! Heuristic price-list extractor.

use tracing::{debug, trace};

use crate::models::config::{ExtractionConfig, VendorHint};
use crate::models::item::ExtractedItem;

use super::dedup::RecordDeduplicator;
use super::lines::normalize_lines;
use super::name::resolve_item_name;
use super::rules::classify_line;
use super::vendor::{apply_vendor, infer_vendor};
use super::ItemExtractor;

/// Line-oriented price-list extractor.
///
/// Scans every line for a pack size and a price, names the record from the
/// surrounding lines and drops repeats. Lines that do not fit are skipped
/// without error.
#[derive(Debug, Clone)]
pub struct PricelistExtractor {
    /// Maximum number of records returned.
    max_items: usize,
    /// Filename rules for the `make` field.
    vendor_hints: Vec<VendorHint>,
}

impl PricelistExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            max_items: config.max_items,
            vendor_hints: config.vendor_hints.clone(),
        }
    }

    /// Set the output cap.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Replace the vendor rules.
    pub fn with_vendor_hints(mut self, hints: Vec<VendorHint>) -> Self {
        self.vendor_hints = hints;
        self
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }
}

impl Default for PricelistExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemExtractor for PricelistExtractor {
    fn extract(&self, text: &str, file_name_hint: Option<&str>) -> Vec<ExtractedItem> {
        let lines = normalize_lines(text);
        let mut records = RecordDeduplicator::new();
        let mut candidates = 0usize;
        let mut duplicates = 0usize;

        for line in &lines {
            if records.count() >= self.max_items {
                debug!("Reached cap of {} records at line {}", self.max_items, line.index);
                break;
            }

            let Some(candidate) = classify_line(line.text) else {
                continue;
            };
            candidates += 1;

            let item = resolve_item_name(&lines, line.index, candidate.unit_start());
            let unit = &candidate.unit.value;
            let price = candidate.price.value.amount;
            trace!(
                "Line {}: {} {} at {} -> {:?}",
                line.index,
                unit.quantity,
                unit.symbol.as_str(),
                price,
                item
            );

            if !records.push(ExtractedItem::new(item, unit.label(), price)) {
                duplicates += 1;
            }
        }

        let mut items = records.into_items();

        if let Some(make) = infer_vendor(file_name_hint, &self.vendor_hints) {
            apply_vendor(&mut items, make);
        }

        debug!(
            "Extracted {} records from {} candidate lines ({} duplicates, {} lines total)",
            items.len(),
            candidates,
            duplicates,
            lines.len()
        );

        items
    }
}
