//! Core data models for the Attendance and Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod company;
mod employee;
mod leave;
mod month;
mod payroll;

pub use attendance::{
    AttendanceKey, AttendanceRecord, AttendanceStatus, RegularizationRequest,
    RegularizationStatus,
};
pub use company::{Announcement, CompanySettings, EmployeeDocument, Holiday};
pub use employee::{BankAccount, Employee, LeaveBalance, SalaryStructure};
pub use leave::{HALF_DAY_LEAVE_TYPE, LeaveRequest, LeaveSession, LeaveStatus};
pub use month::Month;
pub use payroll::{Adjustment, PayrollKey, PayrollRecord};
