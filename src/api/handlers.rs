//! HTTP request handlers for the Attendance and Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use chrono::{Local, NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    Announcement, AttendanceRecord, CompanySettings, Employee, EmployeeDocument, Holiday,
    LeaveRequest, Month, PayrollRecord, RegularizationRequest,
};
use crate::service::{AttendanceService, LeaveService, PayrollService};
use crate::store::Store;

use super::request::{
    AnnouncementRequest, DocumentRequest, LeaveApplicationRequest, ManualMarkRequest,
    ProcessPayrollRequest, PunchRequest, RegularizationApplicationRequest,
    RegularizationReviewRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/:id/documents", get(list_documents))
        .route("/attendance/check-in", post(check_in_handler))
        .route("/attendance/check-out", post(check_out_handler))
        .route("/attendance/mark", post(manual_mark_handler))
        .route("/attendance/:month", get(month_attendance_handler))
        .route("/leaves", get(list_leaves).post(apply_leave_handler))
        .route("/leaves/:id/approve", post(approve_leave_handler))
        .route("/leaves/:id/reject", post(reject_leave_handler))
        .route(
            "/regularizations",
            get(list_regularizations).post(submit_regularization_handler),
        )
        .route(
            "/regularizations/:id/approve",
            post(approve_regularization_handler),
        )
        .route(
            "/regularizations/:id/reject",
            post(reject_regularization_handler),
        )
        .route("/payroll/process", post(process_payroll_handler))
        .route("/payroll/:month", get(month_payroll_handler))
        .route("/holidays", get(list_holidays).post(create_holiday))
        .route("/holidays/:date", delete(delete_holiday_handler))
        .route("/settings", get(get_settings).put(update_settings))
        .route(
            "/announcements",
            get(list_announcements).post(create_announcement),
        )
        .route("/announcements/:id", delete(delete_announcement_handler))
        .route("/documents", post(create_document))
        .with_state(state)
}

fn parse_month(value: &str) -> Result<Month, ApiErrorResponse> {
    value
        .parse::<Month>()
        .map_err(ApiErrorResponse::from)
}

async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiErrorResponse> {
    Ok(Json(state.store().employees()?))
}

async fn create_employee(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> Result<Json<Employee>, ApiErrorResponse> {
    state.store().insert_employee(employee.clone())?;
    info!(employee_id = %employee.id, "employee created");
    Ok(Json(employee))
}

async fn check_in_handler(
    State(state): State<AppState>,
    Json(request): Json<PunchRequest>,
) -> Result<Json<AttendanceRecord>, ApiErrorResponse> {
    let now = Local::now();
    let date = request.date.unwrap_or_else(|| now.date_naive());
    let time = request.time.unwrap_or_else(|| now.time());
    let service = AttendanceService::new(state.store(), state.policy());
    let record = service.check_in(&request.employee_id, date, time)?;
    Ok(Json(record))
}

async fn check_out_handler(
    State(state): State<AppState>,
    Json(request): Json<PunchRequest>,
) -> Result<Json<AttendanceRecord>, ApiErrorResponse> {
    let now = Local::now();
    let date = request.date.unwrap_or_else(|| now.date_naive());
    let time = request.time.unwrap_or_else(|| now.time());
    let service = AttendanceService::new(state.store(), state.policy());
    let record = service.check_out(&request.employee_id, date, time)?;
    Ok(Json(record))
}

async fn manual_mark_handler(
    State(state): State<AppState>,
    Json(request): Json<ManualMarkRequest>,
) -> Result<Json<AttendanceRecord>, ApiErrorResponse> {
    let service = AttendanceService::new(state.store(), state.policy());
    let record = service.mark(&request.employee_id, request.date, request.status)?;
    Ok(Json(record))
}

async fn month_attendance_handler(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<Vec<AttendanceRecord>>, ApiErrorResponse> {
    let month = parse_month(&month)?;
    Ok(Json(state.store().attendance_for_month(month)?))
}

async fn list_leaves(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaveRequest>>, ApiErrorResponse> {
    Ok(Json(state.store().leaves()?))
}

async fn apply_leave_handler(
    State(state): State<AppState>,
    Json(request): Json<LeaveApplicationRequest>,
) -> Result<Json<LeaveRequest>, ApiErrorResponse> {
    let service = LeaveService::new(state.store(), state.policy());
    let leave = service.apply(
        &request.employee_id,
        &request.leave_type,
        request.session,
        request.start_date,
        request.end_date,
        request.reason,
        Local::now().date_naive(),
    )?;
    Ok(Json(leave))
}

async fn approve_leave_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LeaveRequest>, ApiErrorResponse> {
    let service = LeaveService::new(state.store(), state.policy());
    let leave = service.approve(&id, Local::now().date_naive())?;
    Ok(Json(leave))
}

async fn reject_leave_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LeaveRequest>, ApiErrorResponse> {
    let service = LeaveService::new(state.store(), state.policy());
    let leave = service.reject(&id, Local::now().date_naive())?;
    Ok(Json(leave))
}

async fn list_regularizations(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegularizationRequest>>, ApiErrorResponse> {
    Ok(Json(state.store().regularizations()?))
}

async fn submit_regularization_handler(
    State(state): State<AppState>,
    Json(request): Json<RegularizationApplicationRequest>,
) -> Result<Json<RegularizationRequest>, ApiErrorResponse> {
    let service = AttendanceService::new(state.store(), state.policy());
    let filed = service.submit_regularization(
        &request.employee_id,
        request.date,
        request.requested_check_out,
        request.reason,
        Local::now().date_naive(),
    )?;
    Ok(Json(filed))
}

async fn approve_regularization_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RegularizationReviewRequest>,
) -> Result<Json<AttendanceRecord>, ApiErrorResponse> {
    let service = AttendanceService::new(state.store(), state.policy());
    let record = service.approve_regularization(&id, request.admin_remarks)?;
    Ok(Json(record))
}

async fn reject_regularization_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RegularizationReviewRequest>,
) -> Result<Json<RegularizationRequest>, ApiErrorResponse> {
    let remarks = request.admin_remarks.unwrap_or_default();
    let service = AttendanceService::new(state.store(), state.policy());
    let rejected = service.reject_regularization(&id, remarks)?;
    Ok(Json(rejected))
}

/// Handler for the `POST /payroll/process` endpoint.
///
/// Accepts the month, an optional working-day override, and ad-hoc
/// adjustments; returns the processed records.
async fn process_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessPayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking.
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let service = PayrollService::new(state.store(), state.policy());

    let working_days = match request.working_days {
        Some(working_days) => working_days,
        None => match service.derive_working_days(request.month) {
            Ok(working_days) => working_days,
            Err(err) => return error_response(correlation_id, err),
        },
    };

    match service.process(
        request.month,
        working_days,
        &request.adjustments,
        Utc::now(),
    ) {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                month = %request.month,
                working_days,
                employees = records.len(),
                "Payroll processed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(records),
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn error_response(correlation_id: Uuid, err: EngineError) -> axum::response::Response {
    warn!(correlation_id = %correlation_id, error = %err, "Payroll processing failed");
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

async fn month_payroll_handler(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<Vec<PayrollRecord>>, ApiErrorResponse> {
    let month = parse_month(&month)?;
    Ok(Json(state.store().payroll_for_month(month)?))
}

async fn list_holidays(
    State(state): State<AppState>,
) -> Result<Json<Vec<Holiday>>, ApiErrorResponse> {
    Ok(Json(state.store().holidays()?))
}

async fn create_holiday(
    State(state): State<AppState>,
    Json(holiday): Json<Holiday>,
) -> Result<Json<Holiday>, ApiErrorResponse> {
    state.store().upsert_holiday(holiday.clone())?;
    Ok(Json(holiday))
}

async fn delete_holiday_handler(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<StatusCode, ApiErrorResponse> {
    let existed = state.store().delete_holiday(date)?;
    Ok(if existed {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    })
}

async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<CompanySettings>, ApiErrorResponse> {
    Ok(Json(state.store().settings()?))
}

async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<CompanySettings>,
) -> Result<Json<CompanySettings>, ApiErrorResponse> {
    state.store().update_settings(settings)?;
    Ok(Json(settings))
}

async fn list_announcements(
    State(state): State<AppState>,
) -> Result<Json<Vec<Announcement>>, ApiErrorResponse> {
    Ok(Json(state.store().announcements()?))
}

async fn create_announcement(
    State(state): State<AppState>,
    Json(request): Json<AnnouncementRequest>,
) -> Result<Json<Announcement>, ApiErrorResponse> {
    let announcement = Announcement {
        id: Uuid::new_v4().to_string(),
        title: request.title,
        content: request.content,
        date: request.date.unwrap_or_else(|| Local::now().date_naive()),
    };
    state.store().insert_announcement(announcement.clone())?;
    Ok(Json(announcement))
}

async fn delete_announcement_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiErrorResponse> {
    let existed = state.store().delete_announcement(&id)?;
    Ok(if existed {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    })
}

async fn list_documents(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<Vec<EmployeeDocument>>, ApiErrorResponse> {
    Ok(Json(state.store().documents_for_employee(&employee_id)?))
}

async fn create_document(
    State(state): State<AppState>,
    Json(request): Json<DocumentRequest>,
) -> Result<Json<EmployeeDocument>, ApiErrorResponse> {
    let document = EmployeeDocument {
        id: Uuid::new_v4().to_string(),
        employee_id: request.employee_id,
        file_name: request.file_name,
        file_path: request.file_path,
        document_type: request.document_type,
        uploaded_on: Local::now().date_naive(),
    };
    state.store().insert_document(document.clone())?;
    Ok(Json(document))
}
