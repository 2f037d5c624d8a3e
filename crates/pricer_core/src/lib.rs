//! # pricer_core: Foundation Types for the SOL Options Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error types: `PricingError` (`types::error`)
//! - Year-fraction conversion for option expiries (`types::time`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pricer_core::types::time::time_to_expiry;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let expiry = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//!
//! // 366 days in 2024, measured against a 365.25-day year
//! let t = time_to_expiry(expiry, now);
//! assert!((t - 366.0 / 365.25).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
