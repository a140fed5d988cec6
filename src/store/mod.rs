//! The storage collaborator seam.
//!
//! The engine delegates persistence to an external platform; this module
//! pins down the operations the core needs from it: fetch-all,
//! fetch-by-key, insert, update-by-key, and upsert-on-conflict-key per
//! entity, plus the one cross-write boundary leave approval requires.
//!
//! [`MemoryStore`] is the in-process implementation used by tests and the
//! bundled HTTP surface; a production deployment implements [`Store`]
//! against its database.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{
    Announcement, AttendanceKey, AttendanceRecord, CompanySettings, Employee, EmployeeDocument,
    Holiday, LeaveBalance, LeaveRequest, Month, PayrollRecord, RegularizationRequest,
};

/// The operations the engine requires from its storage collaborator.
///
/// Writes are single-row operations; the only multi-row boundary is
/// [`commit_leave_approval`](Store::commit_leave_approval). Upserts must
/// be atomic on the entity's natural key with last-write-wins semantics —
/// that is what resolves two check-ins racing for the same
/// `(employee, date)` row. Failures are surfaced verbatim as
/// `Persistence` errors; the engine never retries and never assumes a
/// partial write happened.
pub trait Store: Send + Sync {
    /// Fetches all employees, in stable id order.
    fn employees(&self) -> EngineResult<Vec<Employee>>;

    /// Fetches one employee by id.
    fn employee(&self, id: &str) -> EngineResult<Option<Employee>>;

    /// Inserts a new employee; fails on a duplicate id.
    fn insert_employee(&self, employee: Employee) -> EngineResult<()>;

    /// Replaces an existing employee row by id.
    fn update_employee(&self, employee: Employee) -> EngineResult<()>;

    /// Fetches the attendance record for one employee-date key.
    fn attendance(&self, key: &AttendanceKey) -> EngineResult<Option<AttendanceRecord>>;

    /// Fetches all attendance records whose date falls in the month.
    fn attendance_for_month(&self, month: Month) -> EngineResult<Vec<AttendanceRecord>>;

    /// Upserts an attendance record on its `(employee, date)` key.
    fn upsert_attendance(&self, record: AttendanceRecord) -> EngineResult<()>;

    /// Fetches all leave requests.
    fn leaves(&self) -> EngineResult<Vec<LeaveRequest>>;

    /// Fetches one leave request by id.
    fn leave(&self, id: &str) -> EngineResult<Option<LeaveRequest>>;

    /// Fetches all leave requests of one employee.
    fn leaves_for_employee(&self, employee_id: &str) -> EngineResult<Vec<LeaveRequest>>;

    /// Fetches an approved leave request covering the given date, if any.
    fn approved_leave_covering(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<LeaveRequest>>;

    /// Inserts a new leave request; fails on a duplicate id.
    fn insert_leave(&self, leave: LeaveRequest) -> EngineResult<()>;

    /// Replaces an existing leave request row by id.
    fn update_leave(&self, leave: LeaveRequest) -> EngineResult<()>;

    /// Writes an approved leave request and the employee's new balance in
    /// one transactional boundary.
    ///
    /// Either both rows land or neither does; the employee is looked up
    /// by `leave.employee_id`.
    fn commit_leave_approval(
        &self,
        leave: LeaveRequest,
        balance: LeaveBalance,
    ) -> EngineResult<()>;

    /// Fetches all payroll records for a month, in stable employee order.
    fn payroll_for_month(&self, month: Month) -> EngineResult<Vec<PayrollRecord>>;

    /// Upserts a payroll record on its `(employee, month)` key.
    fn upsert_payroll(&self, record: PayrollRecord) -> EngineResult<()>;

    /// Fetches all regularization requests.
    fn regularizations(&self) -> EngineResult<Vec<RegularizationRequest>>;

    /// Fetches one regularization request by id.
    fn regularization(&self, id: &str) -> EngineResult<Option<RegularizationRequest>>;

    /// Inserts a new regularization request; fails on a duplicate id.
    fn insert_regularization(&self, request: RegularizationRequest) -> EngineResult<()>;

    /// Replaces an existing regularization request row by id.
    fn update_regularization(&self, request: RegularizationRequest) -> EngineResult<()>;

    /// Fetches all holidays, in date order.
    fn holidays(&self) -> EngineResult<Vec<Holiday>>;

    /// Upserts a holiday on its date.
    fn upsert_holiday(&self, holiday: Holiday) -> EngineResult<()>;

    /// Deletes a holiday by date; returns whether one existed.
    fn delete_holiday(&self, date: NaiveDate) -> EngineResult<bool>;

    /// Fetches the company settings singleton.
    fn settings(&self) -> EngineResult<CompanySettings>;

    /// Replaces the company settings singleton.
    fn update_settings(&self, settings: CompanySettings) -> EngineResult<()>;

    /// Fetches all announcements, newest first.
    fn announcements(&self) -> EngineResult<Vec<Announcement>>;

    /// Inserts a new announcement.
    fn insert_announcement(&self, announcement: Announcement) -> EngineResult<()>;

    /// Deletes an announcement by id; returns whether one existed.
    fn delete_announcement(&self, id: &str) -> EngineResult<bool>;

    /// Fetches the document metadata of one employee.
    fn documents_for_employee(&self, employee_id: &str) -> EngineResult<Vec<EmployeeDocument>>;

    /// Inserts new document metadata.
    fn insert_document(&self, document: EmployeeDocument) -> EngineResult<()>;
}
