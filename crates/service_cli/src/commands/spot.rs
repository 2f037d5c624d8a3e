//! Spot command implementation
//!
//! Fetches the current SOL/USD price through the configured source chain.

use adapter_feeds::{PriceAggregator, PriceQuote};
use tracing::info;

use super::OutputFormat;
use crate::config::CliConfig;
use crate::Result;

/// Fetch one quote from the highest-priority source that answers.
pub fn fetch_spot(config: &CliConfig) -> Result<PriceQuote> {
    let aggregator = PriceAggregator::from_config(&config.feeds)?;
    info!(sources = ?aggregator.source_names(), "Fetching SOL price");
    Ok(aggregator.fetch_spot_price()?)
}

/// Run the spot command
pub fn run(config: &CliConfig, format: OutputFormat) -> Result<()> {
    let quote = fetch_spot(config)?;
    println!("{}", render(&quote, format)?);
    Ok(())
}

fn render(quote: &PriceQuote, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(quote)?),
        OutputFormat::Table => Ok(format!(
            "SOL/USD  ${:.4}\nSource   {}\nAs of    {}",
            quote.price(),
            quote.source_name(),
            quote.observed_at().format("%Y-%m-%d %H:%M:%S UTC")
        )),
    }
}
