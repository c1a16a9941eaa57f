use anyhow::Result;
use clap::Parser;
use menu_prices::dishes::DISHES;
use menu_prices::prices::{apply_price_overrides, SheetClient};

/// CLI tool to fetch the price sheet and reconcile it with the catalog
#[derive(Parser)]
#[command(name = "fetch-prices")]
#[command(about = "Fetch price overrides from the sheet and apply them to the catalog")]
struct Args {
    /// Sheet endpoint (or set MENU_SHEET_URL env var)
    #[arg(long)]
    sheet_url: Option<String>,

    /// Print the full merged catalog instead of just the override map
    #[arg(long)]
    merged: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let client = match args
        .sheet_url
        .or_else(|| std::env::var("MENU_SHEET_URL").ok())
    {
        Some(url) => SheetClient::with_url(url),
        None => SheetClient::new(),
    };

    println!("🔄 Fetching price overrides...");
    let prices = client.fetch_prices_map(&DISHES).await?;
    println!("✅ {} of {} dishes have overrides", prices.len(), DISHES.len());

    if args.merged {
        let merged = apply_price_overrides(&DISHES, &prices);
        println!("{}", serde_json::to_string_pretty(&merged)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&prices)?);
    }

    Ok(())
}
