//! Configuration types for attendance and payroll policy.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from the YAML policy file.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

fn deserialize_weekday<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
    let value = String::deserialize(deserializer)?;
    Weekday::from_str(&value)
        .map_err(|_| serde::de::Error::custom(format!("invalid weekday: {}", value)))
}

/// Rules governing check-in/check-out classification and manual marks.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceRules {
    /// Worked hours below this count as Absent.
    pub half_day_threshold_hours: Decimal,
    /// Worked hours at or above this count as Present; in between is a
    /// half day.
    pub full_day_threshold_hours: Decimal,
    /// Check-in time written by an HR manual mark.
    pub manual_check_in: NaiveTime,
    /// Check-out time written by a manual Present mark.
    pub manual_full_day_check_out: NaiveTime,
    /// Check-out time written by a manual Half Day mark.
    pub manual_half_day_check_out: NaiveTime,
}

/// Rules governing leave accrual.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveRules {
    /// Leave days granted per calendar month, carried forward
    /// indefinitely.
    pub monthly_accrual_days: Decimal,
}

/// Rules governing payroll processing.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollRules {
    /// The weekly rest day excluded from working-day counts.
    #[serde(deserialize_with = "deserialize_weekday")]
    pub rest_day: Weekday,
    /// Fallback proration denominator when the caller supplies neither a
    /// count nor a holiday calendar.
    pub default_working_days: u32,
}

/// The complete policy configuration loaded from YAML.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(policy.attendance.half_day_threshold_hours, Decimal::new(4, 0));
/// assert_eq!(policy.leave.monthly_accrual_days, Decimal::new(2, 0));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Attendance classification rules.
    pub attendance: AttendanceRules,
    /// Leave accrual rules.
    pub leave: LeaveRules,
    /// Payroll processing rules.
    pub payroll: PayrollRules,
}

impl Default for PolicyConfig {
    /// The observed company policy, matching the shipped
    /// `config/policy.yaml`.
    fn default() -> Self {
        Self {
            attendance: AttendanceRules {
                half_day_threshold_hours: Decimal::new(4, 0),
                full_day_threshold_hours: Decimal::new(6, 0),
                manual_check_in: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
                manual_full_day_check_out: NaiveTime::from_hms_opt(18, 0, 0)
                    .expect("valid time"),
                manual_half_day_check_out: NaiveTime::from_hms_opt(13, 0, 0)
                    .expect("valid time"),
            },
            leave: LeaveRules {
                monthly_accrual_days: Decimal::new(2, 0),
            },
            payroll: PayrollRules {
                rest_day: Weekday::Sun,
                default_working_days: 26,
            },
        }
    }
}
