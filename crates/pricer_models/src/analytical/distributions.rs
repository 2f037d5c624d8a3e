//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both functions are generic over `T: Float` so they can be evaluated in
//! `f32` as well as `f64`.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2 * pi)
const SQRT_2PI: f64 = 2.506_628_274_631;

/// Beyond this |x| the tail mass is below f64 resolution.
const TAIL_CUTOFF: f64 = 37.0;

/// Switch point between the rational and continued-fraction branches (10/√2).
const BRANCH_POINT: f64 = 7.071_067_811_865_47;

/// Numerator coefficients of Hart's rational approximation, highest degree first.
const HART_NUM: [f64; 7] = [
    3.526_249_659_989_11e-2,
    0.700_383_064_443_688,
    6.373_962_203_531_65,
    33.912_866_078_383,
    112.079_291_497_871,
    221.213_596_169_931,
    220.206_867_912_376,
];

/// Denominator coefficients of Hart's rational approximation, highest degree first.
const HART_DEN: [f64; 8] = [
    8.838_834_764_831_84e-2,
    1.755_667_163_182_64,
    16.064_177_579_207,
    86.780_732_202_946_1,
    296.564_248_779_674,
    637.333_633_378_831,
    793.826_512_519_948,
    440.413_735_824_752,
];

#[inline]
fn lit<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

#[inline]
fn horner<T: Float>(coeffs: &[f64], x: T) -> T {
    coeffs
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + lit::<T>(c))
}

/// Lower tail mass P(X <= -|x|) for standard normal X.
///
/// Hart (1968) double-precision algorithm in the form given by West (2005):
/// a rational function of |x| for |x| < 7.07, a continued fraction beyond.
#[inline]
fn lower_tail<T: Float>(abs_x: T) -> T {
    if abs_x > lit(TAIL_CUTOFF) {
        return T::zero();
    }

    let gauss = (-abs_x * abs_x / lit(2.0)).exp();

    if abs_x < lit(BRANCH_POINT) {
        gauss * horner(&HART_NUM, abs_x) / horner(&HART_DEN, abs_x)
    } else {
        let mut frac = abs_x + lit(0.65);
        for k in [4.0, 3.0, 2.0, 1.0] {
            frac = abs_x + lit::<T>(k) / frac;
        }
        gauss / frac / lit(SQRT_2PI)
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// The lower tail is evaluated directly and the upper half is taken as its
/// complement, so `norm_cdf(-x) == 1 - norm_cdf(x)` holds to rounding for
/// every x.
///
/// # Accuracy
/// Absolute error below 1e-14 in `f64` across the real line.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    if x.is_nan() {
        return x;
    }

    let tail = lower_tail(x.abs());
    if x > T::zero() {
        T::one() - tail
    } else {
        tail
    }
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2), symmetric about zero.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-10);
/// assert_eq!(norm_pdf(1.5_f64), norm_pdf(-1.5_f64));
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    lit::<T>(FRAC_1_SQRT_2PI) * (-x * x / lit(2.0)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        let reference = [
            (-3.0, 0.0013498980316300946),
            (-2.0, 0.022750131948179195),
            (-1.0, 0.15865525393145707),
            (-0.5, 0.3085375387259869),
            (0.5, 0.6914624612740131),
            (1.0, 0.8413447460685429),
            (1.96, 0.9750021048517795),
            (2.0, 0.9772498680518208),
            (3.0, 0.9986501019683699),
        ];
        for (x, expected) in reference {
            assert_relative_eq!(norm_cdf(x), expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_norm_cdf_far_tail_branch() {
        // Φ(-8) ≈ 6.22e-16, evaluated on the continued-fraction branch
        let value = norm_cdf(-8.0_f64);
        assert_relative_eq!(value, 6.220960574271784e-16, max_relative = 1e-6);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for i in -100..=100 {
            let x = i as f64 * 0.1;
            assert_relative_eq!(norm_cdf(-x), 1.0 - norm_cdf(x), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_cdf_extreme_values() {
        assert_eq!(norm_cdf(40.0_f64), 1.0);
        assert_eq!(norm_cdf(-40.0_f64), 0.0);
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);

        let cdf_10 = norm_cdf(10.0_f64);
        assert!(cdf_10 > 0.9999999 && cdf_10 <= 1.0);
        let cdf_neg_10 = norm_cdf(-10.0_f64);
        assert!((0.0..1e-7).contains(&cdf_neg_10));
    }

    #[test]
    fn test_norm_cdf_nan_propagates() {
        assert!(norm_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_norm_cdf_monotonic_across_branch_point() {
        let values: Vec<f64> = (-120..=120).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) >= norm_cdf(pair[0]),
                "CDF decreasing between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-6);
        assert!((norm_cdf(1.0_f32) - 0.841_344_7).abs() < 1e-6);
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(3.0_f64), 0.004431848411938008, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_pdf_symmetric_and_non_negative() {
        for i in 0..=100 {
            let x = i as f64 * 0.1;
            assert_eq!(norm_pdf(x), norm_pdf(-x));
            assert!(norm_pdf(x) >= 0.0);
        }
    }

    #[test]
    fn test_cdf_derivative_matches_pdf() {
        let h = 1e-5;
        for x in [-4.0, -2.0, -0.7, 0.0, 0.7, 2.0, 4.0, 7.5] {
            let numerical = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical, norm_pdf(x), epsilon = 1e-8);
        }
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_cdf_in_unit_interval(x in -50.0f64..50.0) {
                let p = norm_cdf(x);
                prop_assert!((0.0..=1.0).contains(&p));
            }

            #[test]
            fn test_cdf_reflection(x in -10.0f64..10.0) {
                prop_assert!((norm_cdf(-x) - (1.0 - norm_cdf(x))).abs() < 1e-15);
            }

            #[test]
            fn test_cdf_nondecreasing(x in -10.0f64..10.0, step in 1e-3f64..2.0) {
                prop_assert!(norm_cdf(x + step) >= norm_cdf(x));
            }

            #[test]
            fn test_pdf_even(x in -10.0f64..10.0) {
                prop_assert_eq!(norm_pdf(x), norm_pdf(-x));
            }
        }
    }
}
