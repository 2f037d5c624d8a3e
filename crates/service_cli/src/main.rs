//! solprice - SOL Options Pricer CLI
//!
//! Operational entry point composing the price feeds and the pricing engine.
//!
//! # Commands
//!
//! - `solprice spot` - Fetch the current SOL/USD price
//! - `solprice price --expiry <date>` - Value a European call and put
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate is the only place where the feed
//! adapters and the pricing crates meet. Each invocation fetches at most once;
//! repeated refreshes are left to whoever runs the command.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::price::PriceArgs;
use commands::OutputFormat;
use config::CliConfig;
pub use error::{CliError, Result};

/// SOL Options Pricer CLI
#[derive(Parser)]
#[command(name = "solprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./solprice.toml if present)
    #[arg(short, long, global = true, env = "SOLPRICE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(
        long,
        global = true,
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the current SOL/USD spot price
    Spot {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Price a European call and put with Black-Scholes
    Price {
        /// Expiry date (YYYY-MM-DD), must be after today
        #[arg(short, long)]
        expiry: NaiveDate,

        /// Strike price (defaults to spot)
        #[arg(short = 'k', long)]
        strike: Option<f64>,

        /// Spot price (fetched from the price feeds when omitted)
        #[arg(short, long)]
        spot: Option<f64>,

        /// Annualised volatility as a decimal, e.g. 0.8 for 80%
        #[arg(long)]
        volatility: Option<f64>,

        /// Risk-free rate as a decimal, e.g. 0.05 for 5%
        #[arg(short, long)]
        rate: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;

    let level = match (&cli.log_level, cli.verbose) {
        (Some(level), _) => level.clone(),
        (None, true) => "debug".to_string(),
        (None, false) => config.log_level.clone(),
    };
    init_tracing(&level);
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Spot { format } => commands::spot::run(&config, format),
        Commands::Price {
            expiry,
            strike,
            spot,
            volatility,
            rate,
            format,
        } => commands::price::run(
            &PriceArgs {
                strike,
                expiry,
                spot,
                volatility,
                rate,
                format,
            },
            &config,
        ),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
