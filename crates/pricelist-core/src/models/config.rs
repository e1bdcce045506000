//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{PricelistError, Result};

/// Main configuration for the pricelist pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricelistConfig {
    /// Line heuristics configuration.
    pub extraction: ExtractionConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Request boundary configuration.
    pub request: RequestConfig,
}

/// Price-list extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Stop accepting records once this many have been emitted.
    pub max_items: usize,

    /// Filename fragments mapped to vendor names, checked in order.
    pub vendor_hints: Vec<VendorHint>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_items: 1000,
            vendor_hints: vec![VendorHint::new("cdh", "CDH"), VendorHint::new("bb", "BBChem")],
        }
    }
}

/// A filename fragment that identifies a vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorHint {
    /// Lowercase fragment searched for in the filename.
    pub pattern: String,
    /// Vendor name assigned on a match.
    pub make: String,
}

impl VendorHint {
    pub fn new(pattern: impl Into<String>, make: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            make: make.into(),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum text length to consider a PDF as carrying text.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 50 }
    }
}

/// Request boundary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Text shorter than this (after trimming) needs a document payload.
    pub min_text_length: usize,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self { min_text_length: 50 }
    }
}

impl PricelistConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| PricelistError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
