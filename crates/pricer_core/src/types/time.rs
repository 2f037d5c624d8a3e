//! Time-to-expiry conversion for option pricing.
//!
//! This module converts a calendar expiry date into the year fraction used as
//! the model's time input. The option is taken to expire at the start
//! (00:00) of its expiry date, and a year is 365.25 days.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use pricer_core::types::time::time_to_expiry;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 6, 15)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//!
//! // Expiry on or before today is already expired
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! assert_eq!(time_to_expiry(today, now), 0.0);
//!
//! // Half a day remains until midnight
//! let tomorrow = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
//! assert!((time_to_expiry(tomorrow, now) - 0.5 / 365.25).abs() < 1e-15);
//! ```

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Days in the year used for time to expiry (accounts for leap years).
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Seconds in one model year: 365.25 × 86 400.
pub const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * 86_400.0;

/// Computes the time to expiry in years.
///
/// T = (seconds from `now` until 00:00 on `expiry`) / (365.25 × 86 400)
///
/// # Arguments
/// * `expiry` - Expiry calendar date
/// * `now` - Current instant (wall-clock, no time zone)
///
/// # Returns
/// The year fraction, or exactly `0.0` when `expiry` is on or before the
/// calendar date of `now`. Never negative.
pub fn time_to_expiry(expiry: NaiveDate, now: NaiveDateTime) -> f64 {
    if expiry <= now.date() {
        return 0.0;
    }

    let remaining = expiry.and_time(NaiveTime::MIN) - now;
    let seconds = remaining.num_seconds() as f64 + f64::from(remaining.subsec_nanos()) * 1e-9;

    seconds / SECONDS_PER_YEAR
}

/// Computes the time to expiry in years from the current local time.
///
/// See [`time_to_expiry`].
pub fn time_to_expiry_now(expiry: NaiveDate) -> f64 {
    time_to_expiry(expiry, Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seconds_per_year() {
        assert_eq!(SECONDS_PER_YEAR, 31_557_600.0);
    }

    #[test]
    fn test_full_leap_year() {
        // 2024 is a leap year: 366 days
        let t = time_to_expiry(date(2025, 1, 1), at(2024, 1, 1, 0, 0, 0));
        assert_relative_eq!(t, 366.0 / 365.25, epsilon = 1e-12);
    }

    #[test]
    fn test_thirty_days_from_midnight() {
        let t = time_to_expiry(date(2024, 7, 31), at(2024, 7, 1, 0, 0, 0));
        assert_relative_eq!(t, 30.0 / 365.25, epsilon = 1e-12);
    }

    #[test]
    fn test_partial_day_counts_seconds() {
        // 18:00 on the day before expiry leaves six hours
        let t = time_to_expiry(date(2024, 3, 2), at(2024, 3, 1, 18, 0, 0));
        assert_relative_eq!(t, 6.0 * 3600.0 / SECONDS_PER_YEAR, epsilon = 1e-15);
    }

    #[test]
    fn test_subsecond_precision() {
        let now = date(2024, 3, 1)
            .and_hms_milli_opt(23, 59, 59, 500)
            .unwrap();
        let t = time_to_expiry(date(2024, 3, 2), now);
        assert_relative_eq!(t, 0.5 / SECONDS_PER_YEAR, epsilon = 1e-18);
    }

    #[test]
    fn test_expiry_today_is_zero() {
        assert_eq!(time_to_expiry(date(2024, 3, 1), at(2024, 3, 1, 0, 0, 0)), 0.0);
        assert_eq!(time_to_expiry(date(2024, 3, 1), at(2024, 3, 1, 23, 59, 59)), 0.0);
    }

    #[test]
    fn test_expiry_in_past_is_zero() {
        assert_eq!(time_to_expiry(date(2023, 12, 31), at(2024, 3, 1, 9, 30, 0)), 0.0);
    }

    #[test]
    fn test_now_variant_future_expiry_positive() {
        let expiry = Local::now().date_naive() + chrono::Duration::days(30);
        let t = time_to_expiry_now(expiry);
        assert!(t > 29.0 / 365.25 && t <= 30.0 / 365.25);
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn instant_strategy() -> impl Strategy<Value = NaiveDateTime> {
            (2000i32..2100i32, 1u32..13u32, 1u32..29u32, 0u32..24u32, 0u32..60u32)
                .prop_filter_map("valid instant", |(y, m, d, h, min)| {
                    NaiveDate::from_ymd_opt(y, m, d).and_then(|dt| dt.and_hms_opt(h, min, 0))
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_never_negative(now in instant_strategy(), offset in -400i64..400i64) {
                let expiry = now.date() + chrono::Duration::days(offset);
                prop_assert!(time_to_expiry(expiry, now) >= 0.0);
            }

            #[test]
            fn test_zero_iff_not_after_today(now in instant_strategy(), offset in -400i64..400i64) {
                let expiry = now.date() + chrono::Duration::days(offset);
                let t = time_to_expiry(expiry, now);
                prop_assert_eq!(t == 0.0, expiry <= now.date());
            }

            #[test]
            fn test_bounded_by_whole_days(now in instant_strategy(), offset in 1i64..400i64) {
                let expiry = now.date() + chrono::Duration::days(offset);
                let t = time_to_expiry(expiry, now) * DAYS_PER_YEAR;
                prop_assert!(t > (offset - 1) as f64 - 1e-9);
                prop_assert!(t <= offset as f64 + 1e-9);
            }
        }
    }
}
