//! Extract command - pull records out of a single price list.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use pricelist_core::extract::{ItemExtractor, PricelistExtractor};

use super::output::{format_items, OutputFormat};
use super::{file_name_hint, load_config, read_document};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (PDF or text; `-` reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// File name used for vendor inference (default: the input file name)
    #[arg(long)]
    vendor_hint: Option<String>,

    /// Maximum number of records to return
    #[arg(long)]
    max_items: Option<usize>,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    info!("Processing file: {}", args.input.display());

    let text = read_document(&args.input, &config)?;

    let mut extractor = PricelistExtractor::from_config(&config.extraction);
    if let Some(max_items) = args.max_items {
        extractor = extractor.with_max_items(max_items);
    }

    let hint = args.vendor_hint.clone().or_else(|| file_name_hint(&args.input));
    let items = extractor.extract(&text, hint.as_deref());

    let output = format_items(&items, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} records written to {}",
            style("✓").green(),
            items.len(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
