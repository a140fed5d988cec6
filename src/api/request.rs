//! Request types for the Attendance and Payroll Engine API.
//!
//! This module defines the JSON request structures for the engine's
//! endpoints. Attendance actions may omit the date and time, in which
//! case the handler captures the current wall clock.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{Adjustment, AttendanceStatus, LeaveSession, Month};

/// Request body for `POST /attendance/check-in` and
/// `POST /attendance/check-out`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    /// The employee punching in or out.
    pub employee_id: String,
    /// The attendance date; defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The wall-clock time; defaults to now.
    #[serde(default)]
    pub time: Option<NaiveTime>,
}

/// Request body for `POST /attendance/mark` (HR manual mark).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualMarkRequest {
    /// The employee being marked.
    pub employee_id: String,
    /// The attendance date.
    pub date: NaiveDate,
    /// The status to write.
    pub status: AttendanceStatus,
}

/// Request body for `POST /leaves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveApplicationRequest {
    /// The employee applying for leave.
    pub employee_id: String,
    /// The leave type code; `"HALF_DAY"` is reserved.
    pub leave_type: String,
    /// The session; defaults to the full day.
    #[serde(default)]
    pub session: LeaveSession,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive); ignored for half-day requests.
    pub end_date: NaiveDate,
    /// The stated reason.
    pub reason: String,
}

/// Request body for `POST /regularizations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegularizationApplicationRequest {
    /// The employee whose attendance needs correction.
    pub employee_id: String,
    /// The date of the record to correct.
    pub date: NaiveDate,
    /// The claimed check-out time.
    pub requested_check_out: NaiveTime,
    /// The explanation.
    pub reason: String,
}

/// Request body for regularization review endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegularizationReviewRequest {
    /// Remarks from the reviewing admin. Required for rejection.
    #[serde(default)]
    pub admin_remarks: Option<String>,
}

/// Request body for `POST /payroll/process`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessPayrollRequest {
    /// The month to process.
    pub month: Month,
    /// The proration denominator. When omitted, it is derived from the
    /// holiday calendar and the configured rest day.
    #[serde(default)]
    pub working_days: Option<u32>,
    /// Ad-hoc adjustments keyed by employee id; absent employees get
    /// zero.
    #[serde(default)]
    pub adjustments: HashMap<String, Adjustment>,
}

/// Request body for `POST /announcements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementRequest {
    /// The headline.
    pub title: String,
    /// The body text.
    pub content: String,
    /// The publication date; defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Request body for `POST /documents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRequest {
    /// The employee the document belongs to.
    pub employee_id: String,
    /// The original file name.
    pub file_name: String,
    /// The path within the object store.
    pub file_path: String,
    /// The document category.
    pub document_type: String,
}
