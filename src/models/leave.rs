//! Leave request models and related types.
//!
//! This module defines the leave request lifecycle types used by the
//! leave ledger: the request itself, its session (full day or half),
//! and its review status.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The reserved leave type code for half-day requests.
///
/// Leave types are otherwise free-form codes (`"CL"`, `"SL"`, `"PL"`, ...);
/// only this value changes how the classifier and ledger treat a request.
pub const HALF_DAY_LEAVE_TYPE: &str = "HALF_DAY";

/// Which part of the day a leave request covers.
///
/// Non-half-day leave types always use `FullDay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveSession {
    /// The whole working day.
    #[default]
    FullDay,
    /// The morning half; the employee works the afternoon.
    FirstHalf,
    /// The afternoon half; the employee works the morning.
    SecondHalf,
}

/// The review status of a leave request.
///
/// Transitions only flow `Pending -> Approved` or `Pending -> Rejected`
/// and are never reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting HR review.
    Pending,
    /// Approved; the ledger has settled the balance.
    Approved,
    /// Rejected; no balance effect.
    Rejected,
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "Pending"),
            LeaveStatus::Approved => write!(f, "Approved"),
            LeaveStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// An employee's request for leave over an inclusive date range.
///
/// Half-day requests always have `end_date == start_date`. Once approved,
/// `is_paid` and `days_count` record the ledger's settlement decision.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{LeaveRequest, LeaveSession, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let request = LeaveRequest {
///     id: "leave_001".to_string(),
///     employee_id: "EMP001".to_string(),
///     leave_type: "CL".to_string(),
///     session: LeaveSession::FullDay,
///     start_date: NaiveDate::from_ymd_opt(2026, 2, 9).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
///     reason: "Family function".to_string(),
///     status: LeaveStatus::Pending,
///     requested_on: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
///     reviewed_on: None,
///     is_paid: None,
///     days_count: None,
/// };
/// assert!(request.covers(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()));
/// assert!(!request.is_half_day());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The employee requesting leave.
    pub employee_id: String,
    /// Free-form leave type code; `"HALF_DAY"` is reserved.
    pub leave_type: String,
    /// The session the request covers.
    #[serde(default)]
    pub session: LeaveSession,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The employee's stated reason.
    pub reason: String,
    /// The review status.
    pub status: LeaveStatus,
    /// The date the request was filed.
    pub requested_on: NaiveDate,
    /// The date the request was reviewed, once reviewed.
    #[serde(default)]
    pub reviewed_on: Option<NaiveDate>,
    /// Whether the leave was paid from the balance; set on approval.
    #[serde(default)]
    pub is_paid: Option<bool>,
    /// The days debited from the balance (0.5 or 1.0); set on approval.
    #[serde(default)]
    pub days_count: Option<Decimal>,
}

impl LeaveRequest {
    /// Returns true if the request's date range covers the given date.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if this is a half-day request.
    pub fn is_half_day(&self) -> bool {
        self.leave_type == HALF_DAY_LEAVE_TYPE
    }

    /// Returns true if the request's range intersects `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }
}
