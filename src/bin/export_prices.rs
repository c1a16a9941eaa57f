use anyhow::{bail, Result};
use clap::Parser;
use menu_prices::dishes::DISHES;
use menu_prices::export::{PriceSheetExporter, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;

/// CLI tool to export catalog prices as a spreadsheet-importable table
#[derive(Parser)]
#[command(name = "export-prices")]
#[command(about = "Export the dish catalog's price columns to a delimited sheet file")]
struct Args {
    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Field delimiter; use ';' if your spreadsheet locale misreads commas
    #[arg(short, long, default_value = ",")]
    delimiter: char,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    if !args.delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character");
    }

    let exporter = PriceSheetExporter::new()
        .with_delimiter(args.delimiter as u8)
        .with_output_path(&args.output);

    let rendered = exporter.write(&DISHES)?;

    if !rendered.duplicates.is_empty() {
        println!(
            "⚠️ Duplicate dish ids (first occurrence kept): {}",
            rendered.duplicates.join(", ")
        );
    }
    println!("✅ Generated: {}", args.output.display());
    println!("➡️ Import this file into Google Sheets (File → Import).");

    Ok(())
}
