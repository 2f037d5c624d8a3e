//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Theta, Vega)
//!
//! ## Design Principles
//!
//! - **Stateless**: functions of the contract only, fully reentrant
//! - **Expiry boundary**: at T = 0 the formulas collapse to intrinsic value
//!   instead of evaluating d₁/d₂
//! - **Numerical Stability**: Hart rational CDF, accurate in the far tails

pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use black_scholes::{price_all, Greeks, Valuation};
pub use distributions::{norm_cdf, norm_pdf};
