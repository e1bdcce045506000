//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;
pub mod output;
pub mod request;

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use pricelist_core::models::config::PricelistConfig;
use pricelist_core::pdf::{PdfExtractor, PdfKind};

/// Load configuration from an explicit path, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PricelistConfig> {
    if let Some(path) = config_path {
        return Ok(PricelistConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config from {}", default_path.display());
        Ok(PricelistConfig::from_file(&default_path)?)
    } else {
        Ok(PricelistConfig::default())
    }
}

/// Read the text of a price-list document.
///
/// PDFs go through text extraction, `-` reads stdin, anything else is read as
/// plain text.
pub fn read_document(path: &Path, config: &PricelistConfig) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    if !is_pdf(path) {
        return Ok(fs::read_to_string(path)?);
    }

    let data = fs::read(path)?;
    let content = PdfExtractor::from_bytes(&data)?.extract_all(config.pdf.min_text_length)?;
    debug!("PDF has {} pages", content.page_count);

    if content.kind == PdfKind::Empty {
        warn!(
            "{} carries almost no text; scanned price lists are not supported",
            path.display()
        );
    }

    Ok(content.text)
}

/// File name used as the vendor hint.
pub fn file_name_hint(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .filter(|name| *name != "-")
        .map(str::to_string)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// Whether batch mode should pick up this file.
pub fn is_supported(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    matches!(ext.to_lowercase().as_str(), "pdf" | "txt")
}
