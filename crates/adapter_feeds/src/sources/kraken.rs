//! Kraken public ticker.

use std::collections::HashMap;

use serde::Deserialize;

use super::{endpoint, Decimal};
use crate::config::KrakenConfig;
use crate::error::FetchError;
use crate::http::HttpClient;
use crate::quote::PriceQuote;
use crate::source::PriceSource;

/// Source name reported in quotes and errors.
pub const NAME: &str = "Kraken";

#[derive(Debug, Deserialize)]
struct TickerResponse {
    error: Option<Vec<String>>,
    result: Option<HashMap<String, Ticker>>,
}

/// `c` is the last trade as `[price, lot volume]`.
#[derive(Debug, Deserialize)]
struct Ticker {
    c: Vec<Decimal>,
}

/// Last trade price for one pair from Kraken.
#[derive(Debug, Clone)]
pub struct KrakenSource {
    client: HttpClient,
    url: String,
    pair: String,
}

impl KrakenSource {
    /// Creates the source for `pair` against `base_url`.
    pub fn new(client: HttpClient, base_url: &str, pair: &str) -> Self {
        Self {
            client,
            url: endpoint(base_url, &format!("Ticker?pair={}", pair)),
            pair: pair.to_string(),
        }
    }

    /// Creates the source from its config section.
    pub fn from_config(client: HttpClient, config: &KrakenConfig) -> Self {
        Self::new(client, &config.base_url, &config.pair)
    }

    /// Request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Requires an empty `error` array; any other shape is a parse failure.
    fn extract(&self, response: TickerResponse) -> Result<f64, FetchError> {
        match response.error {
            Some(errors) if errors.is_empty() => {}
            Some(errors) => {
                return Err(FetchError::parse(
                    NAME,
                    format!("invalid response format: {}", errors.join("; ")),
                ))
            }
            None => return Err(FetchError::parse(NAME, "invalid response format: no error array")),
        }

        response
            .result
            .and_then(|mut result| result.remove(&self.pair))
            .and_then(|ticker| ticker.c.into_iter().next())
            .ok_or_else(|| {
                FetchError::parse(NAME, format!("invalid response format: no last trade for {}", self.pair))
            })?
            .to_f64(NAME, "result.c[0]")
    }
}

impl PriceSource for KrakenSource {
    fn name(&self) -> &str {
        NAME
    }

    fn fetch(&self) -> Result<PriceQuote, FetchError> {
        let response: TickerResponse = self.client.get_json(NAME, &self.url)?;
        PriceQuote::new(NAME, self.extract(response)?)
    }
}
