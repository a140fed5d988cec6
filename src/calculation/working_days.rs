//! Working-day counting.
//!
//! This module derives the number of payable days in a month from the
//! weekly rest day and the company holiday set.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::Month;

/// Counts the payable days in a month.
///
/// Enumerates every calendar date in `month` and excludes the weekly
/// `rest_day` and any date present in `holidays`. Pure and deterministic
/// for a given holiday set.
///
/// A holiday that falls on the rest day does not reduce the count
/// further; the date was already excluded.
///
/// # Arguments
///
/// * `month` - The month to count
/// * `rest_day` - The weekly rest day (Sunday in the observed policy)
/// * `holidays` - The set of holiday dates
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::working_days_in_month;
/// use payroll_engine::models::Month;
/// use chrono::Weekday;
/// use std::collections::HashSet;
///
/// // January 2026 has 31 days and four Sundays.
/// let month: Month = "2026-01".parse().unwrap();
/// assert_eq!(working_days_in_month(month, Weekday::Sun, &HashSet::new()), 27);
/// ```
pub fn working_days_in_month(
    month: Month,
    rest_day: Weekday,
    holidays: &HashSet<NaiveDate>,
) -> u32 {
    month
        .days()
        .filter(|date| date.weekday() != rest_day && !holidays.contains(date))
        .count() as u32
}
