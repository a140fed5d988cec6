//! Employee model and related types.
//!
//! This module defines the Employee struct together with its salary
//! structure, bank details, and the mutable leave balance the leave
//! ledger maintains.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use super::Month;

/// The static monthly salary structure of an employee.
///
/// All amounts are monthly figures; the payroll engine prorates the
/// earning components (`basic`, `hra`, `allowances`) by effective days
/// while `deductions` stays flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// Monthly basic pay.
    pub basic: Decimal,
    /// Monthly house rent allowance.
    pub hra: Decimal,
    /// Monthly fixed allowances.
    pub allowances: Decimal,
    /// Monthly flat deductions (not prorated).
    pub deductions: Decimal,
}

impl SalaryStructure {
    /// Returns the sum of the earning components (basic + hra + allowances).
    ///
    /// This is the numerator of the per-day salary used for proration;
    /// deductions are excluded.
    pub fn total_earnings(&self) -> Decimal {
        self.basic + self.hra + self.allowances
    }
}

/// Bank account details for salary disbursement.
///
/// Carried on the employee record for payslip display; never computed
/// over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// The account number.
    pub number: String,
    /// The IFSC routing code.
    pub ifsc: String,
    /// The name of the bank.
    pub bank_name: String,
}

/// The employee's leave balance, maintained by the leave ledger.
///
/// `days` never goes negative (debits clamp at zero); `month` records the
/// last month the monthly accrual was applied for, so accrual happens at
/// most once per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Leave days currently available.
    pub days: Decimal,
    /// The last month the balance was accrued for; `None` before the
    /// first approval.
    pub month: Option<Month>,
}

impl LeaveBalance {
    /// Returns an empty balance with no accrual history.
    pub fn empty() -> Self {
        Self {
            days: Decimal::ZERO,
            month: None,
        }
    }

    /// Returns true if the balance has already been accrued for `month`.
    pub fn is_current_for(&self, month: Month) -> bool {
        self.month == Some(month)
    }
}

/// Represents an employee on the company rolls.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, SalaryStructure, BankAccount, LeaveBalance};
/// use chrono::NaiveDate;
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
/// assert_eq!(employee.salary.total_earnings(), Decimal::new(26000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub full_name: String,
    /// Work email address.
    pub email: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The employee's job title.
    pub designation: String,
    /// The date the employee joined the company.
    pub date_of_joining: NaiveDate,
    /// The static monthly salary structure.
    pub salary: SalaryStructure,
    /// Bank details for disbursement.
    pub bank_account: BankAccount,
    /// The mutable leave balance, updated on leave approval.
    #[serde(default = "LeaveBalance::empty")]
    pub leave_balance: LeaveBalance,
}
