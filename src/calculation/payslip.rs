//! Payslip computation.
//!
//! This module aggregates a month of attendance statuses into day counts
//! and turns them, together with the salary structure and any ad-hoc
//! adjustment, into a payroll record. Everything here is pure; the
//! payroll service does the scanning and persisting.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Adjustment, AttendanceStatus, Employee, Month, PayrollRecord};

/// Day counts for one employee over one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayTally {
    /// Days with status Present.
    pub present: u32,
    /// Days with status Half Day.
    pub half_day: u32,
    /// Every other recorded day.
    pub absent: u32,
}

impl DayTally {
    /// Builds a tally from an iterator of statuses.
    ///
    /// Present and Half Day count toward pay; everything else counts as
    /// absent.
    pub fn from_statuses(statuses: impl IntoIterator<Item = AttendanceStatus>) -> Self {
        let mut tally = Self::default();
        for status in statuses {
            tally.add(status);
        }
        tally
    }

    /// Adds one day's status to the tally.
    pub fn add(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::HalfDay => self.half_day += 1,
            AttendanceStatus::Absent => self.absent += 1,
        }
    }

    /// Returns the payable days: present + 0.5 x half days.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::calculation::DayTally;
    /// use rust_decimal::Decimal;
    ///
    /// let tally = DayTally { present: 20, half_day: 4, absent: 2 };
    /// assert_eq!(tally.effective_days(), Decimal::new(22, 0));
    /// ```
    pub fn effective_days(&self) -> Decimal {
        Decimal::from(self.present) + Decimal::new(5, 1) * Decimal::from(self.half_day)
    }

    /// Returns the number of recorded days, including absences.
    pub fn total(&self) -> u32 {
        self.present + self.half_day + self.absent
    }
}

/// Computes one employee's payslip for a month.
///
/// Prorates each earning component by `effective_days / working_days`,
/// then applies the ad-hoc adjustment: `gross = earned +
/// adjustment.allowance`, `net = gross - deductions -
/// adjustment.deduction`. The employee's flat deduction is not prorated.
/// The prorated component breakdown sums exactly to the earned salary.
///
/// # Errors
///
/// Returns `InsufficientWorkingDays` when `working_days` is zero; the
/// caller must not divide by zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{DayTally, compute_payslip};
/// use payroll_engine::models::{Adjustment, BankAccount, Employee, LeaveBalance, SalaryStructure};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "EMP001".to_string(),
///     full_name: "Asha Verma".to_string(),
///     email: "asha@example.com".to_string(),
///     department: "Engineering".to_string(),
///     designation: "Developer".to_string(),
///     date_of_joining: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     salary: SalaryStructure {
///         basic: Decimal::new(26000, 0),
///         hra: Decimal::ZERO,
///         allowances: Decimal::ZERO,
///         deductions: Decimal::ZERO,
///     },
///     bank_account: BankAccount {
///         number: "0012345678".to_string(),
///         ifsc: "HDFC0000123".to_string(),
///         bank_name: "HDFC".to_string(),
///     },
///     leave_balance: LeaveBalance::empty(),
/// };
/// let tally = DayTally { present: 20, half_day: 4, absent: 2 };
/// let record = compute_payslip(
///     &employee,
///     &tally,
///     26,
///     &Adjustment::default(),
///     "2026-02".parse().unwrap(),
///     Utc::now(),
/// )
/// .unwrap();
/// assert_eq!(record.net, Decimal::new(22000, 0));
/// ```
pub fn compute_payslip(
    employee: &Employee,
    tally: &DayTally,
    working_days: u32,
    adjustment: &Adjustment,
    month: Month,
    processed_on: DateTime<Utc>,
) -> EngineResult<PayrollRecord> {
    if working_days == 0 {
        return Err(EngineError::InsufficientWorkingDays { working_days });
    }

    let denominator = Decimal::from(working_days);
    let effective_days = tally.effective_days();
    let salary = &employee.salary;

    let basic = salary.basic / denominator * effective_days;
    let hra = salary.hra / denominator * effective_days;
    let allowances = salary.allowances / denominator * effective_days;
    let earned = basic + hra + allowances;

    let gross = earned + adjustment.allowance;
    let net = gross - salary.deductions - adjustment.deduction;

    Ok(PayrollRecord {
        employee_id: employee.id.clone(),
        month,
        basic,
        hra,
        allowances,
        deductions: salary.deductions,
        ad_hoc_allowance: adjustment.allowance,
        ad_hoc_deduction: adjustment.deduction,
        working_days,
        gross,
        net,
        present_days: tally.present,
        half_days: tally.half_day,
        total_days: tally.total(),
        processed_on,
    })
}
