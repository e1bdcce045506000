//! Core library for offline price-list extraction.
//!
//! This crate provides:
//! - Heuristic extraction of product records from price-list text
//! - PDF text extraction for documents supplied as raw bytes
//! - The request boundary shared by the CLI and WASM front ends
//! - Price-list data models and configuration

pub mod error;
pub mod models;
pub mod pdf;
pub mod extract;
pub mod request;

pub use rust_decimal;

pub use error::{PricelistError, PdfError, RequestError, Result};
pub use models::config::{PricelistConfig, ExtractionConfig, VendorHint};
pub use models::item::{ExtractedItem, UnitSymbol};
pub use pdf::{PdfProcessor, PdfExtractor, PdfContent, PdfKind};
pub use extract::{extract, ItemExtractor, PricelistExtractor};
pub use request::{handle, handle_json, BoundaryResponse, ErrorBody, ErrorStatus, PricelistRequest};
