//! # Pricer Models (L2: Business Logic)
//!
//! European option contracts and their analytic Black-Scholes-Merton valuation.
//!
//! This crate provides:
//! - The option contract value type with parameter validation (`instruments`)
//! - Moneyness classification and intrinsic values
//! - Standard normal CDF/PDF (`analytical::distributions`)
//! - Closed-form prices and Greeks (`analytical::black_scholes`)
//!
//! ## Design Principles
//!
//! - **Stateless pricing**: every formula is a free function over an
//!   immutable, `Copy` [`instruments::OptionContract`]; nothing is cached
//! - **Validate first**: parameter errors are reported before any numeric work
//! - **All or nothing**: a valuation either carries every price and Greek or
//!   is an error
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::black_scholes;
//! use pricer_models::instruments::OptionContract;
//!
//! let contract = OptionContract::new(150.0, 150.0, 30.0 / 365.0, 0.05, 0.80).unwrap();
//! let valuation = black_scholes::price_all(&contract).unwrap();
//!
//! assert!((valuation.call_price - 13.98).abs() < 0.1);
//! assert!((valuation.delta_call - valuation.delta_put - 1.0).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
