//! Request command - run a JSON request body through the extraction boundary.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use pricelist_core::request::handle_json;

use super::load_config;

/// Arguments for the request command.
#[derive(Args)]
pub struct RequestArgs {
    /// JSON file with `text`, `fileName` and/or `bytesBase64` (`-` reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Print the status code before the body
    #[arg(long)]
    show_status: bool,
}

pub async fn run(args: RequestArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let body = if args.input == PathBuf::from("-") {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        body
    } else {
        fs::read_to_string(&args.input)?
    };

    let response = handle_json(&body, &config);

    if args.show_status {
        println!("{}", response.status);
    }
    println!("{}", response.body);

    if !response.is_success() {
        anyhow::bail!("Request failed with status {}", response.status);
    }

    Ok(())
}
