//! Attendance models and related types.
//!
//! This module defines the daily attendance record, its natural key, and
//! the regularization request used to correct missing or disputed
//! check-outs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// The per-day attendance status of an employee.
///
/// A closed set: every record carries exactly one of these, and the
/// payroll engine matches on them exhaustively.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceStatus;
///
/// let status = AttendanceStatus::HalfDay;
/// assert_eq!(serde_json::to_string(&status).unwrap(), "\"half_day\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// A full payable day.
    Present,
    /// Half a payable day.
    HalfDay,
    /// Not payable.
    Absent,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::HalfDay => write!(f, "Half Day"),
            AttendanceStatus::Absent => write!(f, "Absent"),
        }
    }
}

/// The natural key of an attendance record: one row per employee per date.
///
/// A value type with field-wise equality; storage upserts conflict on this
/// key rather than on a concatenated string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttendanceKey {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
}

/// A single day's attendance for one employee.
///
/// Created on check-in with a provisional `Present` status and no
/// check-out; the status is recomputed when the check-out lands. HR
/// manual marks write the record directly with fixed times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// Wall-clock check-in time, if any.
    pub check_in: Option<NaiveTime>,
    /// Wall-clock check-out time, if any.
    pub check_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    /// Returns the record's natural key.
    pub fn key(&self) -> AttendanceKey {
        AttendanceKey {
            employee_id: self.employee_id.clone(),
            date: self.date,
        }
    }
}

/// The review status of a regularization request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegularizationStatus {
    /// Awaiting admin review.
    Pending,
    /// Approved; the corrected check-out was applied.
    Approved,
    /// Rejected with remarks.
    Rejected,
}

/// An employee-initiated correction for a missing or disputed check-out.
///
/// Approval replays the check-out classification with the requested time;
/// rejection records the admin's remarks and changes nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularizationRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The employee whose attendance is being corrected.
    pub employee_id: String,
    /// The date of the attendance record to correct.
    pub date: NaiveDate,
    /// The check-out time the employee claims.
    pub requested_check_out: NaiveTime,
    /// The employee's explanation.
    pub reason: String,
    /// The review status.
    pub status: RegularizationStatus,
    /// Remarks left by the reviewing admin, if any.
    pub admin_remarks: Option<String>,
    /// The date the request was filed.
    pub requested_on: NaiveDate,
}
