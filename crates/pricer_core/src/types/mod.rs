//! Core error and time types.
//!
//! This module provides:
//! - `error`: Structured error types for pricing operations
//! - `time`: Conversion of calendar expiries into model year fractions
//!
//! # Re-exports
//!
//! For convenience, commonly used items are re-exported at this module level:
//! - [`PricingError`] from `error`
//! - [`time_to_expiry`], [`time_to_expiry_now`], [`SECONDS_PER_YEAR`] from `time`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use time::{time_to_expiry, time_to_expiry_now, SECONDS_PER_YEAR};
