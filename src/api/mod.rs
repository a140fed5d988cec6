//! HTTP API module for the Attendance and Payroll Engine.
//!
//! This module provides the REST endpoints for attendance actions,
//! leave review, regularization review, payroll processing, and the
//! company glue records. Role gating is enforced by the caller above
//! this surface.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AnnouncementRequest, DocumentRequest, LeaveApplicationRequest, ManualMarkRequest,
    ProcessPayrollRequest, PunchRequest, RegularizationApplicationRequest,
    RegularizationReviewRequest,
};
pub use response::ApiError;
pub use state::AppState;
