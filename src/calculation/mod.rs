//! Calculation logic for the Attendance and Payroll Engine.
//!
//! This module contains the pure functions behind the engine: worked
//! duration math with midnight rollover, working-day counting, attendance
//! status classification and its leave-aware merge, leave balance
//! settlement, and payslip computation. Nothing here touches storage.

mod classifier;
mod duration;
mod ledger;
mod payslip;
mod working_days;

pub use classifier::{classify_work_status, merge_with_leave};
pub use duration::duration_hours;
pub use ledger::{LedgerOutcome, days_count_for, settle_leave};
pub use payslip::{DayTally, compute_payslip};
pub use working_days::working_days_in_month;
