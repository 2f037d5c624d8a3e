//! Blocking HTTP transport shared by the price sources.
//!
//! Every request is bounded by the client timeout and makes one attempt.
//! Failures are classified into the [`FetchError`] kinds:
//! - timeout while connecting or reading → `Timeout`
//! - connection, DNS, or non-2xx status → `Network`
//! - body that is not the expected JSON shape → `Parse`

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{ConfigError, FetchError};

/// Blocking HTTP client with a fixed per-request timeout.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpClient {
    /// Builds a client.
    ///
    /// # Errors
    /// `ConfigError::HttpClient` if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ConfigError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issues a GET and decodes the JSON body into `T`.
    ///
    /// Errors are attributed to `source_name`.
    pub fn get_json<T: DeserializeOwned>(&self, source_name: &str, url: &str) -> Result<T, FetchError> {
        let body = self.get_text(source_name, url)?;
        serde_json::from_str(&body)
            .map_err(|e| FetchError::parse(source_name, format!("unexpected response body: {}", e)))
    }

    /// Issues a GET and returns the body of a 2xx response.
    pub fn get_text(&self, source_name: &str, url: &str) -> Result<String, FetchError> {
        tracing::debug!(source = source_name, url, "requesting spot price");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| self.classify(source_name, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::network(
                source_name,
                format!("HTTP status {}", status),
            ));
        }

        response.text().map_err(|e| self.classify(source_name, e))
    }

    fn classify(&self, source_name: &str, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::timeout(
                source_name,
                format!("no response within {}s", self.timeout.as_secs_f64()),
            )
        } else {
            FetchError::network(source_name, err.to_string())
        }
    }
}
