//! Worked-duration calculation.
//!
//! This module computes elapsed worked hours from a check-in/check-out
//! pair of wall-clock times. No date component is carried: a check-out
//! that reads earlier than the check-in is treated as a next-day
//! check-out (midnight rollover).

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

/// Seconds in a day, the modulus for midnight rollover.
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Calculates the elapsed hours between a check-in and a check-out.
///
/// Computes `(check_out - check_in) mod 24h`. When the check-out's
/// second-of-day is numerically less than the check-in's, a full day is
/// added before converting to hours, so an overnight 22:00 -> 06:00 pair
/// yields 8 hours.
///
/// # Arguments
///
/// * `check_in` - The wall-clock check-in time
/// * `check_out` - The wall-clock check-out time
///
/// # Returns
///
/// The elapsed hours as a [`Decimal`], always in `[0, 24)`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::duration_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let check_in = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let check_out = NaiveTime::from_hms_opt(17, 30, 0).unwrap();
/// assert_eq!(duration_hours(check_in, check_out), Decimal::new(85, 1)); // 8.5
///
/// // Overnight shift: checkout reads "earlier" than check-in
/// let night_in = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let night_out = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
/// assert_eq!(duration_hours(night_in, night_out), Decimal::new(80, 1)); // 8.0
/// ```
pub fn duration_hours(check_in: NaiveTime, check_out: NaiveTime) -> Decimal {
    let start = check_in.num_seconds_from_midnight() as i64;
    let end = check_out.num_seconds_from_midnight() as i64;
    let elapsed_seconds = (end - start).rem_euclid(SECONDS_PER_DAY);
    Decimal::new(elapsed_seconds, 0) / Decimal::new(3600, 0)
}
