//! CoinGecko simple price API.

use std::collections::HashMap;

use super::{endpoint, Decimal};
use crate::config::CoinGeckoConfig;
use crate::error::FetchError;
use crate::http::HttpClient;
use crate::quote::PriceQuote;
use crate::source::PriceSource;

/// Source name reported in quotes and errors.
pub const NAME: &str = "CoinGecko";

/// `{ "<coin>": { "<vs>": price } }`
type SimplePriceResponse = HashMap<String, HashMap<String, Decimal>>;

/// Spot price by coin id from CoinGecko.
#[derive(Debug, Clone)]
pub struct CoinGeckoSource {
    client: HttpClient,
    url: String,
    coin_id: String,
    vs_currency: String,
}

impl CoinGeckoSource {
    /// Creates the source for `coin_id` quoted in `vs_currency`.
    pub fn new(client: HttpClient, base_url: &str, coin_id: &str, vs_currency: &str) -> Self {
        Self {
            client,
            url: endpoint(
                base_url,
                &format!("simple/price?ids={}&vs_currencies={}", coin_id, vs_currency),
            ),
            coin_id: coin_id.to_string(),
            vs_currency: vs_currency.to_string(),
        }
    }

    /// Creates the source from its config section.
    pub fn from_config(client: HttpClient, config: &CoinGeckoConfig) -> Self {
        Self::new(client, &config.base_url, &config.coin_id, &config.vs_currency)
    }

    /// Request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn extract(&self, mut response: SimplePriceResponse) -> Result<f64, FetchError> {
        response
            .remove(&self.coin_id)
            .and_then(|mut quotes| quotes.remove(&self.vs_currency))
            .ok_or_else(|| {
                FetchError::parse(
                    NAME,
                    format!("no {} price for {}", self.vs_currency, self.coin_id),
                )
            })?
            .to_f64(NAME, &format!("{}.{}", self.coin_id, self.vs_currency))
    }
}

impl PriceSource for CoinGeckoSource {
    fn name(&self) -> &str {
        NAME
    }

    fn fetch(&self) -> Result<PriceQuote, FetchError> {
        let response: SimplePriceResponse = self.client.get_json(NAME, &self.url)?;
        PriceQuote::new(NAME, self.extract(response)?)
    }
}
