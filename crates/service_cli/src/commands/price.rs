//! Price command implementation
//!
//! Values a European call and put on SOL with Black-Scholes, using either a
//! given spot or one fetched from the price feeds.

use chrono::{Local, NaiveDate};
use pricer_core::types::time_to_expiry;
use pricer_models::analytical::black_scholes::{price_all, Valuation};
use pricer_models::instruments::OptionContract;
use serde::Serialize;
use tracing::info;

use super::{spot, OutputFormat};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Days used to display the year fraction as calendar days.
const DISPLAY_DAYS_PER_YEAR: f64 = 365.0;

/// Source label for a spot given on the command line.
const MANUAL_SOURCE: &str = "manual";

/// Arguments of the price command.
#[derive(Debug, Clone)]
pub struct PriceArgs {
    /// Strike; defaults to spot
    pub strike: Option<f64>,
    /// Expiry date, must be after today
    pub expiry: NaiveDate,
    /// Spot override; fetched when absent
    pub spot: Option<f64>,
    /// Volatility override
    pub volatility: Option<f64>,
    /// Rate override
    pub rate: Option<f64>,
    /// Output format
    pub format: OutputFormat,
}

/// Inputs, classification and valuation of one contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    spot: f64,
    spot_source: String,
    strike: f64,
    expiry: NaiveDate,
    years_to_expiry: f64,
    volatility: f64,
    rate: f64,
    moneyness: f64,
    moneyness_status: String,
    intrinsic_call: f64,
    intrinsic_put: f64,
    valuation: Valuation,
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    let years = time_to_expiry(args.expiry, Local::now().naive_local());
    if years <= 0.0 {
        return Err(CliError::invalid_argument(format!(
            "Expiry date must be in the future: {}",
            args.expiry
        )));
    }

    let (spot, source) = match args.spot {
        Some(spot) => (spot, MANUAL_SOURCE.to_string()),
        None => {
            let quote = spot::fetch_spot(config)?;
            (quote.price(), quote.source_name().to_string())
        }
    };

    let report = evaluate(
        spot,
        &source,
        args.strike.unwrap_or(spot),
        args.expiry,
        years,
        args.volatility.unwrap_or(config.pricing.volatility),
        args.rate.unwrap_or(config.pricing.rate),
    )?;

    info!(
        strike = report.strike,
        years = report.years_to_expiry,
        call = report.valuation.call_price,
        put = report.valuation.put_price,
        "Valuation complete"
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => println!("{}", render_table(&report)),
    }
    Ok(())
}

/// Builds and values the contract.
pub fn evaluate(
    spot: f64,
    spot_source: &str,
    strike: f64,
    expiry: NaiveDate,
    years: f64,
    volatility: f64,
    rate: f64,
) -> Result<PriceReport> {
    let contract = OptionContract::new(spot, strike, years, rate, volatility)?;
    let valuation = price_all(&contract)?;
    let status = contract.moneyness_status();

    Ok(PriceReport {
        spot,
        spot_source: spot_source.to_string(),
        strike,
        expiry,
        years_to_expiry: years,
        volatility,
        rate,
        moneyness: contract.moneyness(),
        moneyness_status: status.to_string(),
        intrinsic_call: contract.intrinsic_call(),
        intrinsic_put: contract.intrinsic_put(),
        valuation,
    })
}

/// Renders the report as a plain-text table.
pub fn render_table(r: &PriceReport) -> String {
    let v = &r.valuation;
    let row = |label: &str, call: f64, put: f64| {
        format!("│ {:<10} │ {:>12.4} │ {:>12.4} │\n", label, call, put)
    };

    let mut out = String::new();
    out.push_str(&format!("SOL spot     ${:.4} ({})\n", r.spot, r.spot_source));
    out.push_str(&format!("Strike       ${:.4}\n", r.strike));
    out.push_str(&format!(
        "Expiry       {} ({:.4} years, {:.1} days)\n",
        r.expiry,
        r.years_to_expiry,
        r.years_to_expiry * DISPLAY_DAYS_PER_YEAR
    ));
    out.push_str(&format!("Volatility   {:.2}%\n", r.volatility * 100.0));
    out.push_str(&format!("Rate         {:.2}%\n", r.rate * 100.0));
    out.push_str(&format!("Moneyness    {:.4} {}\n", r.moneyness, r.moneyness_status));
    out.push_str(&format!(
        "Intrinsic    call ${:.4}, put ${:.4}\n",
        r.intrinsic_call, r.intrinsic_put
    ));
    out.push('\n');
    out.push_str("┌────────────┬──────────────┬──────────────┐\n");
    out.push_str("│            │         Call │          Put │\n");
    out.push_str("├────────────┼──────────────┼──────────────┤\n");
    out.push_str(&row("Price", v.call_price, v.put_price));
    out.push_str(&row("Delta", v.delta_call, v.delta_put));
    out.push_str(&row("Gamma", v.gamma, v.gamma));
    out.push_str(&row("Theta/day", v.theta_call, v.theta_put));
    out.push_str(&row("Vega/1%", v.vega, v.vega));
    out.push_str("└────────────┴──────────────┴──────────────┘");
    out
}
