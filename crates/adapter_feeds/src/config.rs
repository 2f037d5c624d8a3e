//! Feed configuration management
//!
//! Handles loading source settings from TOML files and environment variables.
//! Defaults reproduce the standard SOL/USD setup: Jupiter, Kraken, CoinGecko,
//! then Binance, each bounded by a 10 second timeout.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable overriding [`FeedConfig::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "SOLPRICE_FEED_TIMEOUT_SECS";

/// Environment variable overriding [`FeedConfig::user_agent`].
pub const ENV_USER_AGENT: &str = "SOLPRICE_FEED_USER_AGENT";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// SOL token mint address on Solana.
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Jupiter price API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JupiterConfig {
    /// Whether the source is tried
    pub enabled: bool,
    /// Priority, lowest first
    pub rank: u32,
    /// API base, without trailing path
    pub base_url: String,
    /// Token mint address
    pub mint: String,
}

impl Default for JupiterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rank: 1,
            base_url: "https://price.jup.ag/v4".to_string(),
            mint: SOL_MINT.to_string(),
        }
    }
}

/// Kraken public ticker settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KrakenConfig {
    /// Whether the source is tried
    pub enabled: bool,
    /// Priority, lowest first
    pub rank: u32,
    /// API base, without trailing path
    pub base_url: String,
    /// Asset pair, also the key of the ticker in the response
    pub pair: String,
}

impl Default for KrakenConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rank: 2,
            base_url: "https://api.kraken.com/0/public".to_string(),
            pair: "SOLUSD".to_string(),
        }
    }
}

/// CoinGecko simple price settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinGeckoConfig {
    /// Whether the source is tried
    pub enabled: bool,
    /// Priority, lowest first
    pub rank: u32,
    /// API base, without trailing path
    pub base_url: String,
    /// Coin identifier
    pub coin_id: String,
    /// Quote currency
    pub vs_currency: String,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rank: 3,
            base_url: "https://api.coingecko.com/api/v3".to_string(),
            coin_id: "solana".to_string(),
            vs_currency: "usd".to_string(),
        }
    }
}

/// Binance ticker price settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinanceConfig {
    /// Whether the source is tried
    pub enabled: bool,
    /// Priority, lowest first
    pub rank: u32,
    /// API base, without trailing path
    pub base_url: String,
    /// Trading symbol
    pub symbol: String,
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rank: 4,
            base_url: "https://api.binance.com/api/v3".to_string(),
            symbol: "SOLUSDT".to_string(),
        }
    }
}

/// Price feed configuration.
///
/// # Examples
/// ```
/// use adapter_feeds::FeedConfig;
///
/// let config: FeedConfig = toml::from_str(
///     r#"
///     timeout_secs = 5
///
///     [binance]
///     enabled = false
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.timeout_secs, 5);
/// assert!(!config.binance.enabled);
/// assert_eq!(config.kraken.pair, "SOLUSD");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent to every provider
    pub user_agent: String,
    /// Jupiter settings
    pub jupiter: JupiterConfig,
    /// Kraken settings
    pub kraken: KrakenConfig,
    /// CoinGecko settings
    pub coingecko: CoinGeckoConfig,
    /// Binance settings
    pub binance: BinanceConfig,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("solprice/", env!("CARGO_PKG_VERSION")).to_string(),
            jupiter: JupiterConfig::default(),
            kraken: KrakenConfig::default(),
            coingecko: CoinGeckoConfig::default(),
            binance: BinanceConfig::default(),
        }
    }
}

impl FeedConfig {
    /// Load configuration from defaults plus environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: FeedConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides on top of the current values.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())?;
        self.validate()?;
        Ok(self)
    }

    /// Apply overrides from an arbitrary key lookup.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{} is not a whole number: {}", ENV_TIMEOUT_SECS, raw))
            })?;
        }

        if let Some(agent) = lookup(ENV_USER_AGENT) {
            self.user_agent = agent;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(self.timeout_secs));
        }

        let enabled = self.enabled_ranks();
        if enabled.is_empty() {
            return Err(ConfigError::NoSourceEnabled);
        }

        for (i, (rank, name)) in enabled.iter().enumerate() {
            if let Some((_, first)) = enabled[..i].iter().find(|(r, _)| r == rank) {
                return Err(ConfigError::DuplicateRank {
                    rank: *rank,
                    first: first.to_string(),
                    second: name.to_string(),
                });
            }
        }

        let required = [
            (self.jupiter.enabled, "jupiter.base_url", &self.jupiter.base_url),
            (self.jupiter.enabled, "jupiter.mint", &self.jupiter.mint),
            (self.kraken.enabled, "kraken.base_url", &self.kraken.base_url),
            (self.kraken.enabled, "kraken.pair", &self.kraken.pair),
            (self.coingecko.enabled, "coingecko.base_url", &self.coingecko.base_url),
            (self.coingecko.enabled, "coingecko.coin_id", &self.coingecko.coin_id),
            (self.coingecko.enabled, "coingecko.vs_currency", &self.coingecko.vs_currency),
            (self.binance.enabled, "binance.base_url", &self.binance.base_url),
            (self.binance.enabled, "binance.symbol", &self.binance.symbol),
        ];
        for (enabled, field, value) in required {
            if enabled && value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field.to_string()));
            }
        }

        Ok(())
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Ranks and names of the enabled sources, in declaration order.
    fn enabled_ranks(&self) -> Vec<(u32, &'static str)> {
        [
            (self.jupiter.enabled, self.jupiter.rank, "Jupiter"),
            (self.kraken.enabled, self.kraken.rank, "Kraken"),
            (self.coingecko.enabled, self.coingecko.rank, "CoinGecko"),
            (self.binance.enabled, self.binance.rank, "Binance"),
        ]
        .into_iter()
        .filter(|(enabled, _, _)| *enabled)
        .map(|(_, rank, name)| (rank, name))
        .collect()
    }
}
