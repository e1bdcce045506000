//! Error types for the pricelist-core library.
//!
//! Line-level irregularities never surface here: the extractor absorbs them by
//! skipping the line. Only document decoding, request validation and I/O fail.

use thiserror::Error;

/// Error type for configuration and file handling.
#[derive(Error, Debug)]
pub enum PricelistError {
    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors raised at the request boundary.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request body is not a JSON object of the expected shape.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Neither usable text nor a document payload was supplied.
    #[error("No text/bytes provided")]
    MissingInput,

    /// The document payload is not valid base64.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),

    /// The document payload could not be turned into text.
    #[error("{0}")]
    Pdf(#[from] PdfError),

    /// The response could not be encoded.
    #[error("failed to encode response: {0}")]
    Encode(String),
}

/// Result type for the pricelist library.
pub type Result<T> = std::result::Result<T, PricelistError>;
