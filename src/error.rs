//! Error types for the Attendance and Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during attendance tracking,
//! leave settlement, and payroll processing.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Attendance and Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A check-in was attempted for a day that already has one.
    #[error("Employee '{employee_id}' already checked in on {date}")]
    AlreadyCheckedIn {
        /// The employee that attempted the check-in.
        employee_id: String,
        /// The date of the existing check-in.
        date: NaiveDate,
    },

    /// A check-out was attempted without a prior check-in.
    #[error("Employee '{employee_id}' has no check-in on {date}")]
    NoCheckIn {
        /// The employee that attempted the check-out.
        employee_id: String,
        /// The date with no check-in.
        date: NaiveDate,
    },

    /// An employee record was not found in storage.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// A leave request was not found in storage.
    #[error("Leave request not found: {id}")]
    LeaveNotFound {
        /// The leave request id that was not found.
        id: String,
    },

    /// A leave request was reviewed twice.
    ///
    /// Status transitions only flow out of `Pending`; approving or
    /// rejecting an already-reviewed request is rejected.
    #[error("Leave request '{id}' was already reviewed as {status}")]
    LeaveAlreadyReviewed {
        /// The leave request id.
        id: String,
        /// The status the request already holds.
        status: String,
    },

    /// A regularization request was not found in storage.
    #[error("Regularization request not found: {id}")]
    RegularizationNotFound {
        /// The regularization request id that was not found.
        id: String,
    },

    /// A regularization request was reviewed twice.
    #[error("Regularization request '{id}' was already reviewed as {status}")]
    RegularizationAlreadyReviewed {
        /// The regularization request id.
        id: String,
        /// The status the request already holds.
        status: String,
    },

    /// A leave application overlaps an existing non-rejected request.
    #[error("Employee '{employee_id}' already has a leave request covering {date}")]
    OverlappingLeave {
        /// The employee that applied.
        employee_id: String,
        /// The first overlapping date in the requested range.
        date: NaiveDate,
    },

    /// A payroll run was requested with a non-positive working-day count.
    ///
    /// The whole run fails before any employee is processed; proceeding
    /// would divide by zero.
    #[error("Cannot process payroll with {working_days} working days")]
    InsufficientWorkingDays {
        /// The working-day count the caller supplied.
        working_days: u32,
    },

    /// A month string was not in `YYYY-MM` form or out of range.
    #[error("Invalid month: {value}")]
    InvalidMonth {
        /// The string that failed to parse.
        value: String,
    },

    /// A write to the storage collaborator failed.
    ///
    /// Propagated to the caller verbatim; no retry, no partial commit of
    /// the in-memory computation.
    #[error("Persistence failure: {message}")]
    Persistence {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
