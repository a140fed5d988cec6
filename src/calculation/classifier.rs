//! Attendance status classification.
//!
//! This module turns a worked duration into a work-only status using the
//! policy thresholds, then merges that status with any approved leave
//! covering the same day.

use rust_decimal::Decimal;

use crate::config::AttendanceRules;
use crate::models::{AttendanceStatus, LeaveRequest};

/// Classifies a worked duration against the policy thresholds.
///
/// This is the work-only classification, before any leave credit is
/// applied: below the half-day threshold the day is `Absent`, at or
/// above the full-day threshold it is `Present`, and in between it is a
/// `HalfDay`.
///
/// # Arguments
///
/// * `hours` - The worked hours, from [`duration_hours`](super::duration_hours)
/// * `rules` - The attendance policy thresholds
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::classify_work_status;
/// use payroll_engine::config::PolicyConfig;
/// use payroll_engine::models::AttendanceStatus;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(
///     classify_work_status(Decimal::new(65, 1), &policy.attendance), // 6.5h
///     AttendanceStatus::Present
/// );
/// assert_eq!(
///     classify_work_status(Decimal::new(45, 1), &policy.attendance), // 4.5h
///     AttendanceStatus::HalfDay
/// );
/// assert_eq!(
///     classify_work_status(Decimal::new(2, 0), &policy.attendance), // 2h
///     AttendanceStatus::Absent
/// );
/// ```
pub fn classify_work_status(hours: Decimal, rules: &AttendanceRules) -> AttendanceStatus {
    if hours < rules.half_day_threshold_hours {
        AttendanceStatus::Absent
    } else if hours < rules.full_day_threshold_hours {
        AttendanceStatus::HalfDay
    } else {
        AttendanceStatus::Present
    }
}

/// Merges a work-only status with an approved leave covering the day.
///
/// - No leave: the work status stands.
/// - Half-day leave: the half leave credit stacks with the work credit.
///   An employee who worked at least the half-day threshold (work status
///   `HalfDay` or `Present`) ends up `Present` (0.5 leave + 0.5 work);
///   otherwise the day is a `HalfDay` on leave credit alone.
/// - Any other leave type is a full-day credit: the day is `Present`
///   regardless of any incidental work detected, capped at one day.
///
/// The caller is responsible for passing only an *approved* request that
/// covers the record's date.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::merge_with_leave;
/// use payroll_engine::models::AttendanceStatus;
///
/// assert_eq!(
///     merge_with_leave(AttendanceStatus::HalfDay, None),
///     AttendanceStatus::HalfDay
/// );
/// ```
pub fn merge_with_leave(
    work_status: AttendanceStatus,
    leave: Option<&LeaveRequest>,
) -> AttendanceStatus {
    match leave {
        None => work_status,
        Some(request) if request.is_half_day() => match work_status {
            AttendanceStatus::HalfDay | AttendanceStatus::Present => AttendanceStatus::Present,
            AttendanceStatus::Absent => AttendanceStatus::HalfDay,
        },
        Some(_) => AttendanceStatus::Present,
    }
}
