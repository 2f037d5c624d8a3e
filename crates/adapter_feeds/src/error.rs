//! Error types for price fetching.
//!
//! This module provides:
//! - `FetchError`: A single source's failure, tagged by kind
//! - `FetchErrorKind`: Copyable tag for branching on the failure kind
//! - `AggregateFetchFailure`: Every configured source failed
//! - `ConfigError`: Invalid feed configuration

use std::fmt;

use thiserror::Error;

/// Failure kind of a single fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    /// Connection, DNS, or non-success HTTP status
    Network,
    /// No complete response within the configured timeout
    Timeout,
    /// Response received but the expected fields were missing or malformed
    Parse,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchErrorKind::Network => write!(f, "network"),
            FetchErrorKind::Timeout => write!(f, "timeout"),
            FetchErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// A single price source's failure, attributed to that source.
///
/// # Examples
/// ```
/// use adapter_feeds::{FetchError, FetchErrorKind};
///
/// let err = FetchError::timeout("Jupiter", "no response after 10s");
/// assert_eq!(err.kind(), FetchErrorKind::Timeout);
/// assert_eq!(err.source_name(), "Jupiter");
/// assert_eq!(err.to_string(), "Jupiter: timeout: no response after 10s");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection, DNS, or HTTP status failure.
    #[error("{source_name}: network error: {message}")]
    Network {
        /// Originating source
        source_name: String,
        /// Transport detail
        message: String,
    },

    /// The request did not complete within the timeout.
    #[error("{source_name}: timeout: {message}")]
    Timeout {
        /// Originating source
        source_name: String,
        /// Transport detail
        message: String,
    },

    /// The response did not carry a usable price.
    #[error("{source_name}: parse error: {message}")]
    Parse {
        /// Originating source
        source_name: String,
        /// What was missing or malformed
        message: String,
    },
}

impl FetchError {
    /// Create a network error.
    pub fn network(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error.
    pub fn timeout(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Timeout {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Kind tag of this error.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network { .. } => FetchErrorKind::Network,
            Self::Timeout { .. } => FetchErrorKind::Timeout,
            Self::Parse { .. } => FetchErrorKind::Parse,
        }
    }

    /// Name of the source that failed.
    pub fn source_name(&self) -> &str {
        match self {
            Self::Network { source_name, .. }
            | Self::Timeout { source_name, .. }
            | Self::Parse { source_name, .. } => source_name,
        }
    }

    /// Failure detail without the source prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Network { message, .. }
            | Self::Timeout { message, .. }
            | Self::Parse { message, .. } => message,
        }
    }
}

/// Every configured price source failed.
///
/// Carries one error per source, in the order the sources were tried.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("all {} price sources failed{}", .errors.len(), render_failures(.errors))]
pub struct AggregateFetchFailure {
    errors: Vec<FetchError>,
}

fn render_failures(errors: &[FetchError]) -> String {
    errors
        .iter()
        .map(|e| format!("\n  - {}", e))
        .collect::<String>()
}

impl AggregateFetchFailure {
    /// Wraps the ordered per-source errors.
    pub fn new(errors: Vec<FetchError>) -> Self {
        Self { errors }
    }

    /// Per-source errors in priority order.
    pub fn errors(&self) -> &[FetchError] {
        &self.errors
    }

    /// Consumes the failure, returning the per-source errors.
    pub fn into_errors(self) -> Vec<FetchError> {
        self.errors
    }
}

/// Feed configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Timeout must be at least one second
    #[error("Invalid timeout: {0}s. Must be at least 1 second")]
    InvalidTimeout(u64),

    /// Two enabled sources share a rank
    #[error("Duplicate source rank {rank}: {first} and {second}")]
    DuplicateRank {
        /// Shared rank
        rank: u32,
        /// Source seen first
        first: String,
        /// Source seen second
        second: String,
    },

    /// Every source is disabled
    #[error("No price source is enabled")]
    NoSourceEnabled,

    /// A required field is empty
    #[error("Empty value for {0}")]
    EmptyField(String),

    /// Config file could not be read or parsed
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment override could not be parsed
    #[error("Environment variable error: {0}")]
    EnvError(String),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}
