//! European option contract parameters.
//!
//! This module provides the immutable input to every pricing function,
//! validated on construction so that the analytic formulas never see a
//! parameter outside their domain.

use pricer_core::types::PricingError;

use super::moneyness::Moneyness;

/// European option contract on a single underlying.
///
/// Holds the five Black-Scholes inputs. Both the call and the put on the
/// same strike and expiry are described by one contract.
///
/// # Invariants
/// - `spot > 0`, `strike > 0`, `volatility > 0`
/// - `expiry >= 0` (years; zero means at or past expiry)
/// - every field is finite
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionContract;
///
/// let contract = OptionContract::new(150.0, 140.0, 0.25, 0.05, 0.8).unwrap();
/// assert_eq!(contract.spot(), 150.0);
/// assert_eq!(contract.intrinsic_call(), 10.0);
///
/// // Zero volatility is a parameter error, not a NaN price
/// assert!(OptionContract::new(150.0, 140.0, 0.25, 0.05, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ContractFields", into = "ContractFields")
)]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
}

impl OptionContract {
    /// Creates a new contract with validation.
    ///
    /// # Arguments
    /// * `spot` - Underlying price S (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `expiry` - Time to expiry T in years (must be non-negative)
    /// * `rate` - Continuously compounded risk-free rate r
    /// * `volatility` - Annualised volatility σ (must be positive)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending input.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(PricingError::invalid_parameter("spot", spot));
        }
        if !(strike.is_finite() && strike > 0.0) {
            return Err(PricingError::invalid_parameter("strike", strike));
        }
        if !(expiry.is_finite() && expiry >= 0.0) {
            return Err(PricingError::invalid_parameter("expiry", expiry));
        }
        if !rate.is_finite() {
            return Err(PricingError::invalid_parameter("rate", rate));
        }
        if !(volatility.is_finite() && volatility > 0.0) {
            return Err(PricingError::invalid_parameter("volatility", volatility));
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Returns a copy of this contract repriced against a new spot.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `spot` is not positive and finite.
    pub fn with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        Self::new(spot, self.strike, self.expiry, self.rate, self.volatility)
    }

    /// Returns the underlying price (S).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years (T).
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// True when the contract is at or past expiry (T = 0).
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expiry <= 0.0
    }

    /// Call payoff if exercised now: max(S − K, 0).
    #[inline]
    pub fn intrinsic_call(&self) -> f64 {
        (self.spot - self.strike).max(0.0)
    }

    /// Put payoff if exercised now: max(K − S, 0).
    #[inline]
    pub fn intrinsic_put(&self) -> f64 {
        (self.strike - self.spot).max(0.0)
    }

    /// Spot-to-strike ratio S / K.
    #[inline]
    pub fn moneyness(&self) -> f64 {
        self.spot / self.strike
    }

    /// Moneyness bucket of the call side.
    pub fn moneyness_status(&self) -> Moneyness {
        Moneyness::classify(self.moneyness())
    }
}

/// Unvalidated wire form used for (de)serialisation.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ContractFields {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<ContractFields> for OptionContract {
    type Error = PricingError;

    fn try_from(f: ContractFields) -> Result<Self, Self::Error> {
        Self::new(f.spot, f.strike, f.expiry, f.rate, f.volatility)
    }
}

#[cfg(feature = "serde")]
impl From<OptionContract> for ContractFields {
    fn from(c: OptionContract) -> Self {
        Self {
            spot: c.spot,
            strike: c.strike,
            expiry: c.expiry,
            rate: c.rate,
            volatility: c.volatility,
        }
    }
}
