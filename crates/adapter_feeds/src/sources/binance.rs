//! Binance ticker price API.

use serde::Deserialize;

use super::{endpoint, Decimal};
use crate::config::BinanceConfig;
use crate::error::FetchError;
use crate::http::HttpClient;
use crate::quote::PriceQuote;
use crate::source::PriceSource;

/// Source name reported in quotes and errors.
pub const NAME: &str = "Binance";

#[derive(Debug, Deserialize)]
struct TickerPrice {
    price: Option<Decimal>,
}

/// Latest price for one symbol from Binance.
#[derive(Debug, Clone)]
pub struct BinanceSource {
    client: HttpClient,
    url: String,
}

impl BinanceSource {
    /// Creates the source for `symbol` against `base_url`.
    pub fn new(client: HttpClient, base_url: &str, symbol: &str) -> Self {
        Self {
            client,
            url: endpoint(base_url, &format!("ticker/price?symbol={}", symbol)),
        }
    }

    /// Creates the source from its config section.
    pub fn from_config(client: HttpClient, config: &BinanceConfig) -> Self {
        Self::new(client, &config.base_url, &config.symbol)
    }

    /// Request URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PriceSource for BinanceSource {
    fn name(&self) -> &str {
        NAME
    }

    fn fetch(&self) -> Result<PriceQuote, FetchError> {
        let response: TickerPrice = self.client.get_json(NAME, &self.url)?;
        let price = response
            .price
            .ok_or_else(|| FetchError::parse(NAME, "no price field"))?
            .to_f64(NAME, "price")?;
        PriceQuote::new(NAME, price)
    }
}
