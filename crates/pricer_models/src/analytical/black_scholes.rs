//! Black-Scholes pricing model for European options.
//!
//! Stateless closed-form prices and Greeks over an [`OptionContract`].
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = max(S·N(d₁) - K·e^(-rT)·N(d₂), 0)
//! **Put Price**: P = max(K·e^(-rT)·N(-d₂) - S·N(-d₁), 0)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Reporting Conventions
//!
//! - Theta is per calendar day: the annual rate divided by 365.
//! - Vega is per volatility point: ∂V/∂σ divided by 100.
//!
//! ## Expiry Boundary
//!
//! At T = 0 nothing is divided by √T. Prices are intrinsic values, delta is
//! the exercise indicator, and gamma, theta and vega are zero.

use pricer_core::types::PricingError;

use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::OptionContract;

/// Days per year used to express theta as daily decay.
pub const THETA_DAYS_PER_YEAR: f64 = 365.0;

/// Divisor expressing vega per one-point (1%) volatility move.
pub const VEGA_PER_POINT: f64 = 100.0;

/// Sensitivities for one side (call or put) of a contract.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Delta: ∂V/∂S
    pub delta: f64,
    /// Gamma: ∂²V/∂S² (same for both sides)
    pub gamma: f64,
    /// Theta: daily time decay
    pub theta: f64,
    /// Vega: value change per one-point volatility move (same for both sides)
    pub vega: f64,
}

/// Complete valuation of a contract: both prices and every Greek.
///
/// Produced only by [`price_all`], which never returns a partially filled
/// valuation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation {
    /// Call option price
    pub call_price: f64,
    /// Put option price
    pub put_price: f64,
    /// Call delta
    pub delta_call: f64,
    /// Put delta
    pub delta_put: f64,
    /// Gamma (shared)
    pub gamma: f64,
    /// Call theta per day
    pub theta_call: f64,
    /// Put theta per day
    pub theta_put: f64,
    /// Vega per volatility point (shared)
    pub vega: f64,
}

impl Valuation {
    /// Greeks of the call side.
    pub fn call_greeks(&self) -> Greeks {
        Greeks {
            delta: self.delta_call,
            gamma: self.gamma,
            theta: self.theta_call,
            vega: self.vega,
        }
    }

    /// Greeks of the put side.
    pub fn put_greeks(&self) -> Greeks {
        Greeks {
            delta: self.delta_put,
            gamma: self.gamma,
            theta: self.theta_put,
            vega: self.vega,
        }
    }

    fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("call price", self.call_price),
            ("put price", self.put_price),
            ("call delta", self.delta_call),
            ("put delta", self.delta_put),
            ("gamma", self.gamma),
            ("call theta", self.theta_call),
            ("put theta", self.theta_put),
            ("vega", self.vega),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
        .map(|(name, _)| name)
    }
}

/// Intermediate terms shared by every formula for T > 0.
#[derive(Debug, Clone, Copy)]
struct Terms {
    sqrt_t: f64,
    d1: f64,
    d2: f64,
    /// K·e^(-rT)
    discounted_strike: f64,
    /// φ(d₁)
    pdf_d1: f64,
}

impl Terms {
    /// Returns `None` at or past expiry.
    fn of(c: &OptionContract) -> Option<Self> {
        if c.is_expired() {
            return None;
        }

        let sqrt_t = c.expiry().sqrt();
        let vol_sqrt_t = c.volatility() * sqrt_t;
        let drift = (c.rate() + 0.5 * c.volatility() * c.volatility()) * c.expiry();
        let d1 = ((c.spot() / c.strike()).ln() + drift) / vol_sqrt_t;

        Some(Self {
            sqrt_t,
            d1,
            d2: d1 - vol_sqrt_t,
            discounted_strike: c.strike() * (-c.rate() * c.expiry()).exp(),
            pdf_d1: norm_pdf(d1),
        })
    }

    /// -S·φ(d₁)·σ / (2√T), the part of theta common to both sides.
    fn theta_decay(&self, c: &OptionContract) -> f64 {
        -c.spot() * self.pdf_d1 * c.volatility() / (2.0 * self.sqrt_t)
    }
}

/// Computes d₁, or `None` when the contract is at expiry.
pub fn d1(contract: &OptionContract) -> Option<f64> {
    Terms::of(contract).map(|t| t.d1)
}

/// Computes d₂ = d₁ − σ√T, or `None` when the contract is at expiry.
pub fn d2(contract: &OptionContract) -> Option<f64> {
    Terms::of(contract).map(|t| t.d2)
}

/// Computes the European call price.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::call_price;
/// use pricer_models::instruments::OptionContract;
///
/// let expired = OptionContract::new(200.0, 150.0, 0.0, 0.05, 0.8).unwrap();
/// assert_eq!(call_price(&expired), 50.0);
/// ```
pub fn call_price(contract: &OptionContract) -> f64 {
    match Terms::of(contract) {
        None => contract.intrinsic_call(),
        Some(t) => call_from(contract, &t),
    }
}

/// Computes the European put price.
pub fn put_price(contract: &OptionContract) -> f64 {
    match Terms::of(contract) {
        None => contract.intrinsic_put(),
        Some(t) => put_from(contract, &t),
    }
}

/// Computes call delta N(d₁); 1 or 0 at expiry.
pub fn delta_call(contract: &OptionContract) -> f64 {
    match Terms::of(contract) {
        None => {
            if contract.spot() > contract.strike() {
                1.0
            } else {
                0.0
            }
        }
        Some(t) => norm_cdf(t.d1),
    }
}

/// Computes put delta N(d₁) − 1; −1 or 0 at expiry.
pub fn delta_put(contract: &OptionContract) -> f64 {
    match Terms::of(contract) {
        None => {
            if contract.spot() < contract.strike() {
                -1.0
            } else {
                0.0
            }
        }
        Some(t) => norm_cdf(t.d1) - 1.0,
    }
}

/// Computes gamma φ(d₁) / (S·σ·√T); zero at expiry.
pub fn gamma(contract: &OptionContract) -> f64 {
    Terms::of(contract).map_or(0.0, |t| gamma_from(contract, &t))
}

/// Computes call theta per day; zero at expiry.
pub fn theta_call(contract: &OptionContract) -> f64 {
    Terms::of(contract).map_or(0.0, |t| theta_call_from(contract, &t))
}

/// Computes put theta per day; zero at expiry.
pub fn theta_put(contract: &OptionContract) -> f64 {
    Terms::of(contract).map_or(0.0, |t| theta_put_from(contract, &t))
}

/// Computes vega per volatility point S·φ(d₁)·√T / 100; zero at expiry.
pub fn vega(contract: &OptionContract) -> f64 {
    Terms::of(contract).map_or(0.0, |t| vega_from(contract, &t))
}

/// Prices both sides of a contract and computes every Greek.
///
/// # Errors
/// `PricingError::NumericalInstability` if any output is not finite. No
/// partial valuation is returned.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::price_all;
/// use pricer_models::instruments::OptionContract;
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let v = price_all(&contract).unwrap();
///
/// // Put-call parity: C - P = S - K·e^(-rT)
/// let parity = v.call_price - v.put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
pub fn price_all(contract: &OptionContract) -> Result<Valuation, PricingError> {
    let valuation = match Terms::of(contract) {
        None => Valuation {
            call_price: contract.intrinsic_call(),
            put_price: contract.intrinsic_put(),
            delta_call: delta_call(contract),
            delta_put: delta_put(contract),
            gamma: 0.0,
            theta_call: 0.0,
            theta_put: 0.0,
            vega: 0.0,
        },
        Some(t) => {
            let n_d1 = norm_cdf(t.d1);
            Valuation {
                call_price: call_from(contract, &t),
                put_price: put_from(contract, &t),
                delta_call: n_d1,
                delta_put: n_d1 - 1.0,
                gamma: gamma_from(contract, &t),
                theta_call: theta_call_from(contract, &t),
                theta_put: theta_put_from(contract, &t),
                vega: vega_from(contract, &t),
            }
        }
    };

    match valuation.first_non_finite() {
        Some(name) => Err(PricingError::NumericalInstability(format!(
            "{} is not finite",
            name
        ))),
        None => Ok(valuation),
    }
}

#[inline]
fn call_from(c: &OptionContract, t: &Terms) -> f64 {
    (c.spot() * norm_cdf(t.d1) - t.discounted_strike * norm_cdf(t.d2)).max(0.0)
}

#[inline]
fn put_from(c: &OptionContract, t: &Terms) -> f64 {
    (t.discounted_strike * norm_cdf(-t.d2) - c.spot() * norm_cdf(-t.d1)).max(0.0)
}

#[inline]
fn gamma_from(c: &OptionContract, t: &Terms) -> f64 {
    t.pdf_d1 / (c.spot() * c.volatility() * t.sqrt_t)
}

#[inline]
fn theta_call_from(c: &OptionContract, t: &Terms) -> f64 {
    (t.theta_decay(c) - c.rate() * t.discounted_strike * norm_cdf(t.d2)) / THETA_DAYS_PER_YEAR
}

#[inline]
fn theta_put_from(c: &OptionContract, t: &Terms) -> f64 {
    (t.theta_decay(c) + c.rate() * t.discounted_strike * norm_cdf(-t.d2)) / THETA_DAYS_PER_YEAR
}

#[inline]
fn vega_from(c: &OptionContract, t: &Terms) -> f64 {
    c.spot() * t.pdf_d1 * t.sqrt_t / VEGA_PER_POINT
}
