//! Calendar month model.
//!
//! This module defines the [`Month`] type used to key monthly data such as
//! attendance summaries, leave balances, and payroll records. It replaces
//! ad-hoc `"YYYY-MM"` string-prefix matching with a typed value that can
//! enumerate its days and measure distances between months.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// A calendar month, serialized as `"YYYY-MM"`.
///
/// Used as half of the payroll natural key and as the unit of leave
/// accrual. Ordering is chronological.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Month;
///
/// let month: Month = "2026-02".parse().unwrap();
/// assert_eq!(month.year(), 2026);
/// assert_eq!(month.month(), 2);
/// assert_eq!(month.to_string(), "2026-02");
/// assert_eq!(month.days().count(), 28);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a month from a year and a 1-based month number.
    ///
    /// Returns `InvalidMonth` when the month number is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidMonth {
                value: format!("{:04}-{:02}", year, month),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 1-based month component.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month is validated")
    }

    /// Returns the last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("month is validated")
            .pred_opt()
            .expect("first day of a month has a predecessor")
    }

    /// Enumerates every calendar date in the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last_day();
        self.first_day().iter_days().take_while(move |d| *d <= last)
    }

    /// Returns true if the given date falls within this month.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::Month;
    /// use chrono::NaiveDate;
    ///
    /// let month: Month = "2026-02".parse().unwrap();
    /// assert!(month.contains(NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()));
    /// assert!(!month.contains(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
    /// ```
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Returns the signed number of whole months from `earlier` to `self`.
    ///
    /// `"2026-03".months_since("2026-01") == 2`; the result is negative
    /// when `earlier` is actually later.
    pub fn months_since(&self, earlier: Month) -> i32 {
        (self.year - earlier.year) * 12 + self.month as i32 - earlier.month as i32
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidMonth {
            value: s.to_string(),
        };
        let (year_str, month_str) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;
        Month::new(year, month).map_err(|_| invalid())
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
