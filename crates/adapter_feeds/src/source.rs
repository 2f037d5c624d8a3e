//! The price source seam.

use crate::error::FetchError;
use crate::quote::PriceQuote;

/// A single external provider of spot prices.
///
/// Implementations make exactly one attempt per call, bounded by their own
/// timeout, and attribute every failure to [`PriceSource::name`].
pub trait PriceSource: Send + Sync {
    /// Display name, also carried by quotes and errors.
    fn name(&self) -> &str;

    /// Fetches the current spot price.
    fn fetch(&self) -> Result<PriceQuote, FetchError>;
}
