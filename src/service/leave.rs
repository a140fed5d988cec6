//! Leave service.
//!
//! Application and review of leave requests. Approval settles the
//! employee's balance through the ledger arithmetic and persists the
//! request and the balance through the store's single transactional
//! boundary.

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::calculation::settle_leave;
use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    HALF_DAY_LEAVE_TYPE, LeaveRequest, LeaveSession, LeaveStatus, Month,
};
use crate::store::Store;

/// Drives the leave request lifecycle over the store.
pub struct LeaveService<'a, S: Store + ?Sized> {
    store: &'a S,
    policy: &'a PolicyConfig,
}

impl<'a, S: Store + ?Sized> LeaveService<'a, S> {
    /// Creates a service over the given store and policy.
    pub fn new(store: &'a S, policy: &'a PolicyConfig) -> Self {
        Self { store, policy }
    }

    /// Files a new leave request in `Pending` status.
    ///
    /// Half-day requests (the reserved `HALF_DAY` type, or any non-full
    /// session) are pinned to a single day: the end date is forced to
    /// the start date. The request is rejected with `OverlappingLeave`
    /// when any non-rejected request of the same employee intersects the
    /// range.
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        &self,
        employee_id: &str,
        leave_type: &str,
        session: LeaveSession,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: String,
        requested_on: NaiveDate,
    ) -> EngineResult<LeaveRequest> {
        if self.store.employee(employee_id)?.is_none() {
            return Err(EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            });
        }

        let is_half = leave_type == HALF_DAY_LEAVE_TYPE || session != LeaveSession::FullDay;
        let end_date = if is_half { start_date } else { end_date };

        for existing in self.store.leaves_for_employee(employee_id)? {
            if existing.status != LeaveStatus::Rejected
                && existing.overlaps(start_date, end_date)
            {
                return Err(EngineError::OverlappingLeave {
                    employee_id: employee_id.to_string(),
                    date: start_date.max(existing.start_date),
                });
            }
        }

        let request = LeaveRequest {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            leave_type: leave_type.to_string(),
            session,
            start_date,
            end_date,
            reason,
            status: LeaveStatus::Pending,
            requested_on,
            reviewed_on: None,
            is_paid: None,
            days_count: None,
        };
        self.store.insert_leave(request.clone())?;
        info!(
            employee_id,
            leave_type,
            request_id = %request.id,
            %start_date,
            %end_date,
            "leave requested"
        );
        Ok(request)
    }

    /// Approves a pending leave request and settles the balance.
    ///
    /// The ledger accrues any carryforward owed for the leave month,
    /// decides paid-vs-unpaid, and clamps the new balance at zero; the
    /// request and the balance are then persisted through one store
    /// call. A request that is not `Pending` is rejected with
    /// `LeaveAlreadyReviewed`.
    pub fn approve(&self, leave_id: &str, reviewed_on: NaiveDate) -> EngineResult<LeaveRequest> {
        let mut request = self.pending_request(leave_id)?;
        let employee = self.store.employee(&request.employee_id)?.ok_or_else(|| {
            EngineError::EmployeeNotFound {
                id: request.employee_id.clone(),
            }
        })?;

        let leave_month = Month::from_date(request.start_date);
        let outcome = settle_leave(
            &employee.leave_balance,
            leave_month,
            request.session,
            &self.policy.leave,
        );

        request.status = LeaveStatus::Approved;
        request.reviewed_on = Some(reviewed_on);
        request.is_paid = Some(outcome.is_paid);
        request.days_count = Some(outcome.days_count);

        self.store
            .commit_leave_approval(request.clone(), outcome.balance)?;
        info!(
            leave_id,
            employee_id = %request.employee_id,
            is_paid = outcome.is_paid,
            days_count = %outcome.days_count,
            balance = %outcome.balance.days,
            "leave approved"
        );
        Ok(request)
    }

    /// Rejects a pending leave request.
    ///
    /// Updates the status and review date only; the balance is never
    /// touched.
    pub fn reject(&self, leave_id: &str, reviewed_on: NaiveDate) -> EngineResult<LeaveRequest> {
        let mut request = self.pending_request(leave_id)?;
        request.status = LeaveStatus::Rejected;
        request.reviewed_on = Some(reviewed_on);
        self.store.update_leave(request.clone())?;
        info!(leave_id, employee_id = %request.employee_id, "leave rejected");
        Ok(request)
    }

    fn pending_request(&self, leave_id: &str) -> EngineResult<LeaveRequest> {
        let request = self
            .store
            .leave(leave_id)?
            .ok_or_else(|| EngineError::LeaveNotFound {
                id: leave_id.to_string(),
            })?;
        if request.status != LeaveStatus::Pending {
            return Err(EngineError::LeaveAlreadyReviewed {
                id: leave_id.to_string(),
                status: request.status.to_string(),
            });
        }
        Ok(request)
    }
}
