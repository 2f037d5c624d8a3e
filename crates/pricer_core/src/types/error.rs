//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from option pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Parameter errors are raised before any numeric work is done, so a
/// caller never sees a NaN or infinite price in place of an error.
///
/// # Variants
/// - `InvalidParameter`: A contract input is outside its valid domain
/// - `NumericalInstability`: Valid inputs produced a non-finite output
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter { parameter: "volatility", value: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid parameter: volatility = 0");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PricingError {
    /// A contract input is outside its valid domain
    /// (S, K or σ not strictly positive, T negative, or any non-finite value).
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter {
        /// Name of the offending input
        parameter: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Computation produced a non-finite result.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(parameter: &'static str, value: f64) -> Self {
        Self::InvalidParameter { parameter, value }
    }

    /// Returns `true` for errors caused by caller input.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
