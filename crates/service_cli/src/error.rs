//! CLI error types.

use adapter_feeds::{AggregateFetchFailure, ConfigError};
use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors surfaced by `solprice` commands.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    /// Invalid command-line input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file or environment error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Contract rejected or valuation not finite
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Every price source failed
    #[error("SOL price unavailable: {0}")]
    Feed(#[from] AggregateFetchFailure),

    /// Result could not be rendered
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use adapter_feeds::FetchError;

    #[test]
    fn test_feed_error_lists_sources() {
        let err: CliError = AggregateFetchFailure::new(vec![
            FetchError::timeout("Jupiter", "no response within 10s"),
            FetchError::network("Kraken", "HTTP status 503 Service Unavailable"),
        ])
        .into();

        let text = err.to_string();
        assert!(text.starts_with("SOL price unavailable: all 2 price sources failed"));
        assert!(text.contains("Jupiter: timeout"));
        assert!(text.contains("Kraken: network error"));
    }

    #[test]
    fn test_pricing_error_conversion() {
        let err: CliError = PricingError::invalid_parameter("strike", 0.0).into();
        assert_eq!(err.to_string(), "Pricing error: Invalid parameter: strike = 0");
    }
}
