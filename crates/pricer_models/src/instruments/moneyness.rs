//! Moneyness classification.

use std::fmt;

/// Spot/strike ratio above which a call is reported in the money.
pub const ITM_THRESHOLD: f64 = 1.05;

/// Spot/strike ratio below which a call is reported out of the money.
pub const OTM_THRESHOLD: f64 = 0.95;

/// Moneyness bucket for the call side of a contract.
///
/// Ratios within ±5% of parity count as at the money.
///
/// # Examples
/// ```
/// use pricer_models::instruments::Moneyness;
///
/// assert_eq!(Moneyness::classify(1.10), Moneyness::InTheMoney);
/// assert_eq!(Moneyness::classify(1.00), Moneyness::AtTheMoney);
/// assert_eq!(Moneyness::classify(0.90), Moneyness::OutOfTheMoney);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Moneyness {
    /// S / K > 1.05
    InTheMoney,
    /// 0.95 <= S / K <= 1.05
    AtTheMoney,
    /// S / K < 0.95
    OutOfTheMoney,
}

impl Moneyness {
    /// Classifies a spot/strike ratio.
    pub fn classify(ratio: f64) -> Self {
        if ratio > ITM_THRESHOLD {
            Moneyness::InTheMoney
        } else if ratio < OTM_THRESHOLD {
            Moneyness::OutOfTheMoney
        } else {
            Moneyness::AtTheMoney
        }
    }

    /// Short market code (ITM, ATM, OTM).
    pub fn code(&self) -> &'static str {
        match self {
            Moneyness::InTheMoney => "ITM",
            Moneyness::AtTheMoney => "ATM",
            Moneyness::OutOfTheMoney => "OTM",
        }
    }
}

impl fmt::Display for Moneyness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Moneyness::InTheMoney => "In-the-Money",
            Moneyness::AtTheMoney => "At-the-Money",
            Moneyness::OutOfTheMoney => "Out-of-the-Money",
        };
        write!(f, "{} ({})", label, self.code())
    }
}
