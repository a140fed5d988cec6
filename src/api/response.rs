//! Response types for the Attendance and Payroll Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, code) = match &error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            EngineError::AlreadyCheckedIn { .. } => (StatusCode::CONFLICT, "ALREADY_CHECKED_IN"),
            EngineError::NoCheckIn { .. } => (StatusCode::CONFLICT, "NO_CHECK_IN"),
            EngineError::EmployeeNotFound { .. } => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            EngineError::LeaveNotFound { .. } => (StatusCode::NOT_FOUND, "LEAVE_NOT_FOUND"),
            EngineError::LeaveAlreadyReviewed { .. } => {
                (StatusCode::CONFLICT, "LEAVE_ALREADY_REVIEWED")
            }
            EngineError::RegularizationNotFound { .. } => {
                (StatusCode::NOT_FOUND, "REGULARIZATION_NOT_FOUND")
            }
            EngineError::RegularizationAlreadyReviewed { .. } => {
                (StatusCode::CONFLICT, "REGULARIZATION_ALREADY_REVIEWED")
            }
            EngineError::OverlappingLeave { .. } => (StatusCode::CONFLICT, "OVERLAPPING_LEAVE"),
            EngineError::InsufficientWorkingDays { .. } => {
                (StatusCode::BAD_REQUEST, "INSUFFICIENT_WORKING_DAYS")
            }
            EngineError::InvalidMonth { .. } => (StatusCode::BAD_REQUEST, "INVALID_MONTH"),
            EngineError::Persistence { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_FAILURE")
            }
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(code, error.to_string()),
        }
    }
}
