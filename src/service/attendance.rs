//! Attendance service.
//!
//! The read-compute-write pipeline around the attendance classifier.
//! Each operation here is triggered by a specific user action (check-in,
//! check-out, HR manual mark, regularization review) and runs to
//! completion synchronously; nothing recomputes outside these entry
//! points.

use chrono::{NaiveDate, NaiveTime};
use tracing::info;
use uuid::Uuid;

use crate::calculation::{classify_work_status, duration_hours, merge_with_leave};
use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceKey, AttendanceRecord, AttendanceStatus, RegularizationRequest,
    RegularizationStatus,
};
use crate::store::Store;

/// Drives the per-day attendance state machine over the store.
///
/// The state machine per `(employee, date)` is
/// `NoRecord -> CheckedIn -> Completed`; the storage upsert on the
/// natural key resolves racing writes for the same day.
pub struct AttendanceService<'a, S: Store + ?Sized> {
    store: &'a S,
    policy: &'a PolicyConfig,
}

impl<'a, S: Store + ?Sized> AttendanceService<'a, S> {
    /// Creates a service over the given store and policy.
    pub fn new(store: &'a S, policy: &'a PolicyConfig) -> Self {
        Self { store, policy }
    }

    /// Records a check-in for the day.
    ///
    /// Creates the day's record with a provisional `Present` status and
    /// no check-out. Rejects with `AlreadyCheckedIn` when a check-in
    /// already exists for the day, and with `EmployeeNotFound` when the
    /// employee is unknown.
    pub fn check_in(
        &self,
        employee_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> EngineResult<AttendanceRecord> {
        if self.store.employee(employee_id)?.is_none() {
            return Err(EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            });
        }

        let key = AttendanceKey {
            employee_id: employee_id.to_string(),
            date,
        };
        if let Some(existing) = self.store.attendance(&key)? {
            if existing.check_in.is_some() {
                return Err(EngineError::AlreadyCheckedIn {
                    employee_id: employee_id.to_string(),
                    date,
                });
            }
        }

        let record = AttendanceRecord {
            employee_id: employee_id.to_string(),
            date,
            status: AttendanceStatus::Present,
            check_in: Some(time),
            check_out: None,
        };
        self.store.upsert_attendance(record.clone())?;
        info!(employee_id, %date, %time, "check-in recorded");
        Ok(record)
    }

    /// Records a check-out and classifies the day.
    ///
    /// Computes the worked duration from the stored check-in, classifies
    /// it against the policy thresholds, merges with any approved leave
    /// covering the day, and completes the record. Rejects with
    /// `NoCheckIn` when the day has no prior check-in.
    ///
    /// A repeat check-out is a pure overwrite of the check-out time and
    /// status; the original check-in is never lost. Regularization
    /// approval replays this same transition with a corrected time.
    pub fn check_out(
        &self,
        employee_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> EngineResult<AttendanceRecord> {
        let key = AttendanceKey {
            employee_id: employee_id.to_string(),
            date,
        };
        let mut record = self
            .store
            .attendance(&key)?
            .filter(|r| r.check_in.is_some())
            .ok_or_else(|| EngineError::NoCheckIn {
                employee_id: employee_id.to_string(),
                date,
            })?;

        let check_in = record.check_in.expect("filtered on check_in");
        let hours = duration_hours(check_in, time);
        let work_status = classify_work_status(hours, &self.policy.attendance);
        let leave = self.store.approved_leave_covering(employee_id, date)?;
        let final_status = merge_with_leave(work_status, leave.as_ref());

        record.status = final_status;
        record.check_out = Some(time);
        self.store.upsert_attendance(record.clone())?;
        info!(
            employee_id,
            %date,
            hours = %hours,
            status = %final_status,
            on_leave = leave.is_some(),
            "check-out classified"
        );
        Ok(record)
    }

    /// Writes an HR manual mark, bypassing duration classification.
    ///
    /// The record gets the policy's fixed times for the chosen status:
    /// Present 09:00-18:00, Half Day 09:00-13:00, Absent no times. This
    /// is an administrative override of the state machine.
    pub fn mark(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> EngineResult<AttendanceRecord> {
        if self.store.employee(employee_id)?.is_none() {
            return Err(EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            });
        }

        let rules = &self.policy.attendance;
        let (check_in, check_out) = match status {
            AttendanceStatus::Present => {
                (Some(rules.manual_check_in), Some(rules.manual_full_day_check_out))
            }
            AttendanceStatus::HalfDay => {
                (Some(rules.manual_check_in), Some(rules.manual_half_day_check_out))
            }
            AttendanceStatus::Absent => (None, None),
        };

        let record = AttendanceRecord {
            employee_id: employee_id.to_string(),
            date,
            status,
            check_in,
            check_out,
        };
        self.store.upsert_attendance(record.clone())?;
        info!(employee_id, %date, status = %status, "manual mark written");
        Ok(record)
    }

    /// Files a regularization request for a missing or disputed check-out.
    ///
    /// The day must have a check-in to correct; otherwise `NoCheckIn`.
    pub fn submit_regularization(
        &self,
        employee_id: &str,
        date: NaiveDate,
        requested_check_out: NaiveTime,
        reason: String,
        requested_on: NaiveDate,
    ) -> EngineResult<RegularizationRequest> {
        let key = AttendanceKey {
            employee_id: employee_id.to_string(),
            date,
        };
        if self
            .store
            .attendance(&key)?
            .filter(|r| r.check_in.is_some())
            .is_none()
        {
            return Err(EngineError::NoCheckIn {
                employee_id: employee_id.to_string(),
                date,
            });
        }

        let request = RegularizationRequest {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            date,
            requested_check_out,
            reason,
            status: RegularizationStatus::Pending,
            admin_remarks: None,
            requested_on,
        };
        self.store.insert_regularization(request.clone())?;
        info!(employee_id, %date, request_id = %request.id, "regularization filed");
        Ok(request)
    }

    /// Approves a regularization request.
    ///
    /// Replays the check-out transition with the requested time (the
    /// classifier and leave merge run again), then records the approval.
    pub fn approve_regularization(
        &self,
        request_id: &str,
        admin_remarks: Option<String>,
    ) -> EngineResult<AttendanceRecord> {
        let mut request = self.pending_regularization(request_id)?;

        let record = self.check_out(
            &request.employee_id,
            request.date,
            request.requested_check_out,
        )?;

        request.status = RegularizationStatus::Approved;
        request.admin_remarks = admin_remarks;
        self.store.update_regularization(request)?;
        info!(request_id, status = %record.status, "regularization approved");
        Ok(record)
    }

    /// Rejects a regularization request, recording the admin's remarks.
    pub fn reject_regularization(
        &self,
        request_id: &str,
        admin_remarks: String,
    ) -> EngineResult<RegularizationRequest> {
        let mut request = self.pending_regularization(request_id)?;
        request.status = RegularizationStatus::Rejected;
        request.admin_remarks = Some(admin_remarks);
        self.store.update_regularization(request.clone())?;
        info!(request_id, "regularization rejected");
        Ok(request)
    }

    fn pending_regularization(&self, request_id: &str) -> EngineResult<RegularizationRequest> {
        let request = self.store.regularization(request_id)?.ok_or_else(|| {
            EngineError::RegularizationNotFound {
                id: request_id.to_string(),
            }
        })?;
        if request.status != RegularizationStatus::Pending {
            return Err(EngineError::RegularizationAlreadyReviewed {
                id: request_id.to_string(),
                status: format!("{:?}", request.status),
            });
        }
        Ok(request)
    }
}
