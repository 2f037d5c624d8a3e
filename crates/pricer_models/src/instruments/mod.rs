//! Option contract definitions.
//!
//! # Types
//!
//! - [`OptionContract`]: validated Black-Scholes inputs for one strike/expiry
//! - [`Moneyness`]: ITM/ATM/OTM bucket derived from spot/strike
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{Moneyness, OptionContract};
//!
//! let contract = OptionContract::new(100.0, 120.0, 0.5, 0.05, 0.6).unwrap();
//! assert_eq!(contract.moneyness_status(), Moneyness::OutOfTheMoney);
//! assert_eq!(contract.intrinsic_put(), 20.0);
//! ```

mod contract;
mod moneyness;

pub use contract::OptionContract;
pub use moneyness::{Moneyness, ITM_THRESHOLD, OTM_THRESHOLD};
