//! Spot price quote.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::FetchError;

/// A spot price returned by exactly one source.
///
/// `price` is always finite and strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    price: f64,
    source_name: String,
    observed_at: DateTime<Utc>,
}

impl PriceQuote {
    /// Creates a quote stamped with the current time.
    ///
    /// # Errors
    /// `FetchError::Parse` if `price` is not a positive finite number.
    ///
    /// # Examples
    /// ```
    /// use adapter_feeds::PriceQuote;
    ///
    /// let quote = PriceQuote::new("Kraken", 145.23).unwrap();
    /// assert_eq!(quote.price(), 145.23);
    /// assert!(PriceQuote::new("Kraken", 0.0).is_err());
    /// ```
    pub fn new(source_name: impl Into<String>, price: f64) -> Result<Self, FetchError> {
        Self::observed(source_name, price, Utc::now())
    }

    /// Creates a quote with an explicit observation time.
    ///
    /// # Errors
    /// `FetchError::Parse` if `price` is not a positive finite number.
    pub fn observed(
        source_name: impl Into<String>,
        price: f64,
        observed_at: DateTime<Utc>,
    ) -> Result<Self, FetchError> {
        let source_name = source_name.into();
        if !(price.is_finite() && price > 0.0) {
            return Err(FetchError::parse(
                source_name,
                format!("price must be positive and finite, got {}", price),
            ));
        }
        Ok(Self {
            price,
            source_name,
            observed_at,
        })
    }

    /// Spot price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Name of the source that produced the quote.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// When the quote was received.
    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }
}
