//! Read-compute-write pipelines over the store.
//!
//! Each service wires one area's pure calculations to the storage
//! collaborator: attendance (check-in/check-out state machine, manual
//! marks, regularization), leave (application and review with balance
//! settlement), and payroll (the month-end run). Every operation runs
//! synchronously to completion in response to a single user action.

mod attendance;
mod leave;
mod payroll;

pub use attendance::AttendanceService;
pub use leave::LeaveService;
pub use payroll::PayrollService;
