//! # adapter_feeds: Spot Price Feeds
//!
//! ## Adapter Layer Role
//!
//! adapter_feeds brings external spot prices into the workspace:
//! - `PriceSource`: the uniform fetch contract (`source`)
//! - HTTP adapters for Jupiter, Kraken, CoinGecko and Binance (`sources`)
//! - `PriceAggregator`: ordered first-success fallback (`aggregator`)
//! - `FeedConfig`: provider order, endpoints and timeout (`config`)
//!
//! This crate knows nothing about option pricing; the two are composed by
//! the service layer.
//!
//! ## Failure Model
//!
//! Each attempt yields either a [`PriceQuote`] or a [`FetchError`] tagged
//! `Network`, `Timeout` or `Parse`. When every source fails, the aggregator
//! returns an [`AggregateFetchFailure`] holding one error per source in the
//! order they were tried.
//!
//! ## Usage Examples
//!
//! ```no_run
//! use adapter_feeds::{FeedConfig, PriceAggregator};
//!
//! let aggregator = PriceAggregator::from_config(&FeedConfig::default())?;
//! match aggregator.fetch_spot_price() {
//!     Ok(quote) => println!("SOL/USD {:.2} from {}", quote.price(), quote.source_name()),
//!     Err(failure) => eprintln!("{}", failure),
//! }
//! # Ok::<(), adapter_feeds::ConfigError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod aggregator;
pub mod config;
pub mod error;
pub mod http;
pub mod quote;
pub mod source;
pub mod sources;

pub use aggregator::PriceAggregator;
pub use config::FeedConfig;
pub use error::{AggregateFetchFailure, ConfigError, FetchError, FetchErrorKind};
pub use http::HttpClient;
pub use quote::PriceQuote;
pub use source::PriceSource;
