//! Priority fallback across price sources.
//!
//! Sources are tried one at a time in rank order. The first success is
//! returned and later sources are not called. When every source fails the
//! caller receives all per-source errors in the order they were tried.

use crate::config::FeedConfig;
use crate::error::{AggregateFetchFailure, ConfigError, FetchError};
use crate::http::HttpClient;
use crate::quote::PriceQuote;
use crate::source::PriceSource;
use crate::sources::{BinanceSource, CoinGeckoSource, JupiterSource, KrakenSource};

/// Ordered set of price sources with first-success semantics.
///
/// The order is fixed at construction; there is no cache and no retry.
///
/// # Examples
/// ```
/// use adapter_feeds::{FeedConfig, PriceAggregator};
///
/// let mut config = FeedConfig::default();
/// config.binance.enabled = false;
///
/// let aggregator = PriceAggregator::from_config(&config).unwrap();
/// assert_eq!(aggregator.source_names(), vec!["Jupiter", "Kraken", "CoinGecko"]);
/// ```
pub struct PriceAggregator {
    sources: Vec<Box<dyn PriceSource>>,
}

impl std::fmt::Debug for PriceAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceAggregator")
            .field("sources", &self.source_names())
            .finish()
    }
}

impl PriceAggregator {
    /// Creates an aggregator that tries `sources` in the given order.
    pub fn new(sources: Vec<Box<dyn PriceSource>>) -> Self {
        Self { sources }
    }

    /// Creates an aggregator from `(rank, source)` pairs, lowest rank first.
    ///
    /// Sources with equal rank keep their relative order.
    pub fn ranked(mut sources: Vec<(u32, Box<dyn PriceSource>)>) -> Self {
        sources.sort_by_key(|(rank, _)| *rank);
        Self::new(sources.into_iter().map(|(_, source)| source).collect())
    }

    /// Builds the enabled HTTP sources from configuration.
    ///
    /// # Errors
    /// `ConfigError` if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &FeedConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = HttpClient::new(config.timeout(), &config.user_agent)?;

        let mut ranked: Vec<(u32, Box<dyn PriceSource>)> = Vec::with_capacity(4);
        if config.jupiter.enabled {
            ranked.push((
                config.jupiter.rank,
                Box::new(JupiterSource::from_config(client.clone(), &config.jupiter)),
            ));
        }
        if config.kraken.enabled {
            ranked.push((
                config.kraken.rank,
                Box::new(KrakenSource::from_config(client.clone(), &config.kraken)),
            ));
        }
        if config.coingecko.enabled {
            ranked.push((
                config.coingecko.rank,
                Box::new(CoinGeckoSource::from_config(client.clone(), &config.coingecko)),
            ));
        }
        if config.binance.enabled {
            ranked.push((
                config.binance.rank,
                Box::new(BinanceSource::from_config(client, &config.binance)),
            ));
        }

        Ok(Self::ranked(ranked))
    }

    /// Source names in the order they are tried.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Number of configured sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// True when no source is configured.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Fetches the spot price from the highest-priority source that answers.
    ///
    /// # Errors
    /// `AggregateFetchFailure` with one error per source, in priority order,
    /// if every source fails. An aggregator with no sources fails with an
    /// empty error list.
    pub fn fetch_spot_price(&self) -> Result<PriceQuote, AggregateFetchFailure> {
        let mut errors: Vec<FetchError> = Vec::with_capacity(self.sources.len());

        for (attempt, source) in self.sources.iter().enumerate() {
            tracing::debug!(source = source.name(), attempt = attempt + 1, "fetching spot price");

            match source.fetch() {
                Ok(quote) => {
                    tracing::info!(
                        source = quote.source_name(),
                        price = quote.price(),
                        failed_before = errors.len(),
                        "spot price fetched"
                    );
                    return Ok(quote);
                }
                Err(err) => {
                    tracing::warn!(
                        source = err.source_name(),
                        kind = %err.kind(),
                        "price source failed: {}",
                        err.message()
                    );
                    errors.push(err);
                }
            }
        }

        tracing::error!(sources = errors.len(), "all price sources failed");
        Err(AggregateFetchFailure::new(errors))
    }
}
