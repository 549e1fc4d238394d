//! Print the OpenAPI document as JSON, or write it to a file.

use std::path::PathBuf;

use clap::Parser;
use sewavault::doc::ApiDoc;
use utoipa::OpenApi;

/// Export the kiosk OpenAPI document.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", version, about)]
struct Cli {
    /// Write to this path instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let document = ApiDoc::openapi().to_pretty_json()?;
    match cli.output {
        Some(path) => std::fs::write(path, document)?,
        None => println!("{document}"),
    }
    Ok(())
}
