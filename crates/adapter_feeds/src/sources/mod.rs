//! HTTP price sources.
//!
//! One adapter per provider, each parsing its own response shape:
//!
//! | Source | Request | Price field |
//! |---|---|---|
//! | Jupiter | `GET {base}/price?ids={mint}` | `data[<mint>].price` |
//! | Kraken | `GET {base}/Ticker?pair={pair}` | `result[<pair>].c[0]`, only when `error` is empty |
//! | CoinGecko | `GET {base}/simple/price?ids={coin}&vs_currencies={vs}` | `<coin>.<vs>` |
//! | Binance | `GET {base}/ticker/price?symbol={symbol}` | `price` |

pub mod binance;
pub mod coingecko;
pub mod jupiter;
pub mod kraken;

pub use binance::BinanceSource;
pub use coingecko::CoinGeckoSource;
pub use jupiter::JupiterSource;
pub use kraken::KrakenSource;

use serde::Deserialize;

use crate::error::FetchError;

/// A price encoded either as a JSON number or as a decimal string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum Decimal {
    Number(f64),
    Text(String),
}

impl Decimal {
    pub(crate) fn to_f64(&self, source_name: &str, field: &str) -> Result<f64, FetchError> {
        match self {
            Decimal::Number(value) => Ok(*value),
            Decimal::Text(raw) => raw.trim().parse().map_err(|_| {
                FetchError::parse(source_name, format!("{} is not a number: {:?}", field, raw))
            }),
        }
    }
}

/// Joins a base URL and a path without doubling the slash.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
