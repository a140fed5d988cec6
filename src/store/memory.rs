//! In-memory store implementation.
//!
//! Backs the [`Store`] trait with `RwLock`-guarded maps keyed by the
//! typed natural keys. Used by tests and the bundled HTTP surface; the
//! semantics (key-conflict upserts, single-boundary leave approval)
//! mirror what a database-backed implementation must provide.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Announcement, AttendanceKey, AttendanceRecord, CompanySettings, Employee, EmployeeDocument,
    Holiday, LeaveBalance, LeaveRequest, LeaveStatus, Month, PayrollKey, PayrollRecord,
    RegularizationRequest,
};

use super::Store;

#[derive(Debug, Default)]
struct State {
    employees: BTreeMap<String, Employee>,
    attendance: HashMap<AttendanceKey, AttendanceRecord>,
    leaves: BTreeMap<String, LeaveRequest>,
    payroll: HashMap<PayrollKey, PayrollRecord>,
    regularizations: BTreeMap<String, RegularizationRequest>,
    holidays: BTreeMap<NaiveDate, Holiday>,
    settings: Option<CompanySettings>,
    announcements: Vec<Announcement>,
    documents: Vec<EmployeeDocument>,
}

/// An in-process [`Store`] over `RwLock`-guarded maps.
///
/// # Example
///
/// ```
/// use payroll_engine::store::{MemoryStore, Store};
///
/// let store = MemoryStore::new();
/// assert!(store.employees().unwrap().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    /// Creates an empty store with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, State>> {
        self.state.read().map_err(|_| EngineError::Persistence {
            message: "store lock poisoned".to_string(),
        })
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, State>> {
        self.state.write().map_err(|_| EngineError::Persistence {
            message: "store lock poisoned".to_string(),
        })
    }
}

impl Store for MemoryStore {
    fn employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.read()?.employees.values().cloned().collect())
    }

    fn employee(&self, id: &str) -> EngineResult<Option<Employee>> {
        Ok(self.read()?.employees.get(id).cloned())
    }

    fn insert_employee(&self, employee: Employee) -> EngineResult<()> {
        let mut state = self.write()?;
        if state.employees.contains_key(&employee.id) {
            return Err(EngineError::Persistence {
                message: format!("employee '{}' already exists", employee.id),
            });
        }
        state.employees.insert(employee.id.clone(), employee);
        Ok(())
    }

    fn update_employee(&self, employee: Employee) -> EngineResult<()> {
        let mut state = self.write()?;
        if !state.employees.contains_key(&employee.id) {
            return Err(EngineError::EmployeeNotFound {
                id: employee.id.clone(),
            });
        }
        state.employees.insert(employee.id.clone(), employee);
        Ok(())
    }

    fn attendance(&self, key: &AttendanceKey) -> EngineResult<Option<AttendanceRecord>> {
        Ok(self.read()?.attendance.get(key).cloned())
    }

    fn attendance_for_month(&self, month: Month) -> EngineResult<Vec<AttendanceRecord>> {
        let state = self.read()?;
        let mut records: Vec<AttendanceRecord> = state
            .attendance
            .values()
            .filter(|record| month.contains(record.date))
            .cloned()
            .collect();
        records.sort_by(|a, b| (&a.employee_id, a.date).cmp(&(&b.employee_id, b.date)));
        Ok(records)
    }

    fn upsert_attendance(&self, record: AttendanceRecord) -> EngineResult<()> {
        self.write()?.attendance.insert(record.key(), record);
        Ok(())
    }

    fn leaves(&self) -> EngineResult<Vec<LeaveRequest>> {
        Ok(self.read()?.leaves.values().cloned().collect())
    }

    fn leave(&self, id: &str) -> EngineResult<Option<LeaveRequest>> {
        Ok(self.read()?.leaves.get(id).cloned())
    }

    fn leaves_for_employee(&self, employee_id: &str) -> EngineResult<Vec<LeaveRequest>> {
        Ok(self
            .read()?
            .leaves
            .values()
            .filter(|leave| leave.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn approved_leave_covering(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<LeaveRequest>> {
        Ok(self
            .read()?
            .leaves
            .values()
            .find(|leave| {
                leave.employee_id == employee_id
                    && leave.status == LeaveStatus::Approved
                    && leave.covers(date)
            })
            .cloned())
    }

    fn insert_leave(&self, leave: LeaveRequest) -> EngineResult<()> {
        let mut state = self.write()?;
        if state.leaves.contains_key(&leave.id) {
            return Err(EngineError::Persistence {
                message: format!("leave request '{}' already exists", leave.id),
            });
        }
        state.leaves.insert(leave.id.clone(), leave);
        Ok(())
    }

    fn update_leave(&self, leave: LeaveRequest) -> EngineResult<()> {
        let mut state = self.write()?;
        if !state.leaves.contains_key(&leave.id) {
            return Err(EngineError::LeaveNotFound {
                id: leave.id.clone(),
            });
        }
        state.leaves.insert(leave.id.clone(), leave);
        Ok(())
    }

    fn commit_leave_approval(
        &self,
        leave: LeaveRequest,
        balance: LeaveBalance,
    ) -> EngineResult<()> {
        // One write guard covers both rows, so the pair lands atomically.
        let mut state = self.write()?;
        let employee = state.employees.get_mut(&leave.employee_id).ok_or_else(|| {
            EngineError::EmployeeNotFound {
                id: leave.employee_id.clone(),
            }
        })?;
        employee.leave_balance = balance;
        state.leaves.insert(leave.id.clone(), leave);
        Ok(())
    }

    fn payroll_for_month(&self, month: Month) -> EngineResult<Vec<PayrollRecord>> {
        let state = self.read()?;
        let mut records: Vec<PayrollRecord> = state
            .payroll
            .values()
            .filter(|record| record.month == month)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        Ok(records)
    }

    fn upsert_payroll(&self, record: PayrollRecord) -> EngineResult<()> {
        self.write()?.payroll.insert(record.key(), record);
        Ok(())
    }

    fn regularizations(&self) -> EngineResult<Vec<RegularizationRequest>> {
        Ok(self.read()?.regularizations.values().cloned().collect())
    }

    fn regularization(&self, id: &str) -> EngineResult<Option<RegularizationRequest>> {
        Ok(self.read()?.regularizations.get(id).cloned())
    }

    fn insert_regularization(&self, request: RegularizationRequest) -> EngineResult<()> {
        let mut state = self.write()?;
        if state.regularizations.contains_key(&request.id) {
            return Err(EngineError::Persistence {
                message: format!("regularization request '{}' already exists", request.id),
            });
        }
        state.regularizations.insert(request.id.clone(), request);
        Ok(())
    }

    fn update_regularization(&self, request: RegularizationRequest) -> EngineResult<()> {
        let mut state = self.write()?;
        if !state.regularizations.contains_key(&request.id) {
            return Err(EngineError::RegularizationNotFound {
                id: request.id.clone(),
            });
        }
        state.regularizations.insert(request.id.clone(), request);
        Ok(())
    }

    fn holidays(&self) -> EngineResult<Vec<Holiday>> {
        Ok(self.read()?.holidays.values().cloned().collect())
    }

    fn upsert_holiday(&self, holiday: Holiday) -> EngineResult<()> {
        self.write()?.holidays.insert(holiday.date, holiday);
        Ok(())
    }

    fn delete_holiday(&self, date: NaiveDate) -> EngineResult<bool> {
        Ok(self.write()?.holidays.remove(&date).is_some())
    }

    fn settings(&self) -> EngineResult<CompanySettings> {
        Ok(self.read()?.settings.unwrap_or_default())
    }

    fn update_settings(&self, settings: CompanySettings) -> EngineResult<()> {
        self.write()?.settings = Some(settings);
        Ok(())
    }

    fn announcements(&self) -> EngineResult<Vec<Announcement>> {
        let state = self.read()?;
        let mut announcements = state.announcements.clone();
        announcements.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(announcements)
    }

    fn insert_announcement(&self, announcement: Announcement) -> EngineResult<()> {
        self.write()?.announcements.push(announcement);
        Ok(())
    }

    fn delete_announcement(&self, id: &str) -> EngineResult<bool> {
        let mut state = self.write()?;
        let before = state.announcements.len();
        state.announcements.retain(|a| a.id != id);
        Ok(state.announcements.len() != before)
    }

    fn documents_for_employee(&self, employee_id: &str) -> EngineResult<Vec<EmployeeDocument>> {
        Ok(self
            .read()?
            .documents
            .iter()
            .filter(|doc| doc.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn insert_document(&self, document: EmployeeDocument) -> EngineResult<()> {
        self.write()?.documents.push(document);
        Ok(())
    }
}
