//! Jupiter price API.

use std::collections::HashMap;

use serde::Deserialize;

use super::{endpoint, Decimal};
use crate::config::JupiterConfig;
use crate::error::FetchError;
use crate::http::HttpClient;
use crate::quote::PriceQuote;
use crate::source::PriceSource;

/// Source name reported in quotes and errors.
pub const NAME: &str = "Jupiter";

#[derive(Debug, Deserialize)]
struct PriceResponse {
    data: Option<HashMap<String, Option<PriceEntry>>>,
}

#[derive(Debug, Deserialize)]
struct PriceEntry {
    price: Option<Decimal>,
}

/// Spot price by token mint from the Jupiter aggregator.
#[derive(Debug, Clone)]
pub struct JupiterSource {
    client: HttpClient,
    url: String,
    mint: String,
}

impl JupiterSource {
    /// Creates the source for `mint` against `base_url`.
    pub fn new(client: HttpClient, base_url: &str, mint: &str) -> Self {
        Self {
            client,
            url: endpoint(base_url, &format!("price?ids={}", mint)),
            mint: mint.to_string(),
        }
    }

    /// Creates the source from its config section.
    pub fn from_config(client: HttpClient, config: &JupiterConfig) -> Self {
        Self::new(client, &config.base_url, &config.mint)
    }

    /// Request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn extract(&self, response: PriceResponse) -> Result<f64, FetchError> {
        response
            .data
            .and_then(|mut data| data.remove(&self.mint))
            .flatten()
            .and_then(|entry| entry.price)
            .ok_or_else(|| FetchError::parse(NAME, format!("no price for {}", self.mint)))?
            .to_f64(NAME, "data.price")
    }
}

impl PriceSource for JupiterSource {
    fn name(&self) -> &str {
        NAME
    }

    fn fetch(&self) -> Result<PriceQuote, FetchError> {
        let response: PriceResponse = self.client.get_json(NAME, &self.url)?;
        PriceQuote::new(NAME, self.extract(response)?)
    }
}
