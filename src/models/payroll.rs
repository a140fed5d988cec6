//! Payroll record models.
//!
//! This module defines the derived payroll record emitted by a payroll
//! run, its natural key, and the ad-hoc adjustment applied per run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Month;

/// A one-off adjustment applied to a single payroll run.
///
/// A bonus (`allowance`) or fine (`deduction`) that is not part of the
/// employee's standing salary structure. Defaults to zero for employees
/// absent from the adjustments map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// One-off bonus added to gross.
    #[serde(default)]
    pub allowance: Decimal,
    /// One-off fine subtracted from net.
    #[serde(default)]
    pub deduction: Decimal,
}

/// The natural key of a payroll record: one row per employee per month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayrollKey {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The payroll month.
    pub month: Month,
}

/// A processed payslip for one employee and one month.
///
/// Derived data: re-running the payroll for the same month overwrites the
/// record via upsert. The earning components (`basic`, `hra`,
/// `allowances`) hold the prorated amounts and sum to the earned salary;
/// `deductions` holds the employee's flat monthly deduction.
///
/// Invariants: `gross = earned + ad_hoc_allowance` and
/// `net = gross - deductions - ad_hoc_deduction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The payroll month.
    pub month: Month,
    /// Prorated basic pay.
    pub basic: Decimal,
    /// Prorated house rent allowance.
    pub hra: Decimal,
    /// Prorated fixed allowances.
    pub allowances: Decimal,
    /// Flat monthly deductions (not prorated).
    pub deductions: Decimal,
    /// One-off allowance applied in this run.
    pub ad_hoc_allowance: Decimal,
    /// One-off deduction applied in this run.
    pub ad_hoc_deduction: Decimal,
    /// The working-day denominator used for proration.
    pub working_days: u32,
    /// Gross pay: earned salary plus the ad-hoc allowance.
    pub gross: Decimal,
    /// Net pay: gross minus deductions minus the ad-hoc deduction.
    pub net: Decimal,
    /// Days counted as fully present.
    pub present_days: u32,
    /// Days counted as half days.
    pub half_days: u32,
    /// All attendance records found for the month, including absences.
    pub total_days: u32,
    /// When the record was processed.
    pub processed_on: DateTime<Utc>,
}

impl PayrollRecord {
    /// Returns the record's natural key.
    pub fn key(&self) -> PayrollKey {
        PayrollKey {
            employee_id: self.employee_id.clone(),
            month: self.month,
        }
    }

    /// Returns the earned salary: the sum of the prorated components.
    pub fn earned_salary(&self) -> Decimal {
        self.basic + self.hra + self.allowances
    }
}
