//! CLI configuration management
//!
//! Priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Config file (`solprice.toml`)
//! 4. Default values

use std::path::{Path, PathBuf};

use adapter_feeds::{ConfigError, FeedConfig};
use serde::Deserialize;

/// Config file read when `--config` is not given and the file exists.
pub const DEFAULT_CONFIG_FILE: &str = "solprice.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Pricing inputs used when not given on the command line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingDefaults {
    /// Annualised volatility as a decimal (0.80 = 80%)
    pub volatility: f64,
    /// Continuously compounded risk-free rate as a decimal
    pub rate: f64,
}

impl Default for PricingDefaults {
    fn default() -> Self {
        Self {
            volatility: 0.80,
            rate: 0.05,
        }
    }
}

/// Top-level `solprice.toml` layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default tracing level when `RUST_LOG` is unset
    pub log_level: String,
    /// Price feed settings
    pub feeds: FeedConfig,
    /// Pricing defaults
    pub pricing: PricingDefaults,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            feeds: FeedConfig::default(),
            pricing: PricingDefaults::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the config: explicit path, then `solprice.toml` if present,
    /// then defaults. Feed environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(&fallback)?
                } else {
                    Self::default()
                }
            }
        };

        config.feeds = config.feeds.with_env_overrides()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::FileError(format!(
                "Invalid log level: {}. Must be one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        self.feeds.validate()
    }
}
