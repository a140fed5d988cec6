//! End-to-end tests for the Attendance and Payroll Engine.
//!
//! This suite drives the HTTP surface over a seeded in-memory store and
//! covers the full pipeline:
//! - Check-in/check-out classification thresholds
//! - Leave-aware status merging (half-day and full-day leave)
//! - Leave balance accrual, carryforward, and the paid/unpaid decision
//! - Working-day derivation from the holiday calendar
//! - Payroll proration, adjustments, and idempotent re-runs
//! - Regularization replay
//! - Error cases

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::PolicyConfig;
use payroll_engine::models::{
    BankAccount, Employee, LeaveBalance, SalaryStructure,
};
use payroll_engine::store::{MemoryStore, Store};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_employee(id: &str, basic: &str, deductions: &str) -> Employee {
    Employee {
        id: id.to_string(),
        full_name: "Asha Verma".to_string(),
        email: format!("{}@example.com", id.to_lowercase()),
        department: "Engineering".to_string(),
        designation: "Developer".to_string(),
        date_of_joining: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        salary: SalaryStructure {
            basic: Decimal::from_str(basic).unwrap(),
            hra: Decimal::ZERO,
            allowances: Decimal::ZERO,
            deductions: Decimal::from_str(deductions).unwrap(),
        },
        bank_account: BankAccount {
            number: "0012345678".to_string(),
            ifsc: "HDFC0000123".to_string(),
            bank_name: "HDFC".to_string(),
        },
        leave_balance: LeaveBalance::empty(),
    }
}

fn create_router_with_employee() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_employee(create_employee("EMP001", "26000", "0"))
        .unwrap();
    let router = create_router(AppState::new(store.clone(), PolicyConfig::default()));
    (router, store)
}

async fn send(router: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn punch(router: &Router, endpoint: &str, employee_id: &str, date: &str, time: &str) -> (StatusCode, Value) {
    send(
        router,
        "POST",
        endpoint,
        json!({"employee_id": employee_id, "date": date, "time": time}),
    )
    .await
}

async fn work_day(router: &Router, employee_id: &str, date: &str, check_in: &str, check_out: &str) -> Value {
    let (status, _) = punch(router, "/attendance/check-in", employee_id, date, check_in).await;
    assert_eq!(status, StatusCode::OK);
    let (status, record) = punch(router, "/attendance/check-out", employee_id, date, check_out).await;
    assert_eq!(status, StatusCode::OK);
    record
}

async fn apply_leave(router: &Router, body: Value) -> String {
    let (status, leave) = send(router, "POST", "/leaves", body).await;
    assert_eq!(status, StatusCode::OK, "leave application failed: {}", leave);
    leave["id"].as_str().unwrap().to_string()
}

async fn approve_leave(router: &Router, id: &str) -> Value {
    let (status, leave) = send(
        router,
        "POST",
        &format!("/leaves/{}/approve", id),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "leave approval failed: {}", leave);
    leave
}

fn assert_decimal_eq(value: &Value, expected: &str) {
    let actual = Decimal::from_str(value.as_str().unwrap()).unwrap();
    assert_eq!(actual.normalize(), Decimal::from_str(expected).unwrap().normalize());
}

// =============================================================================
// Attendance classification
// =============================================================================

#[tokio::test]
async fn test_six_hours_classifies_present() {
    let (router, _) = create_router_with_employee();
    let record = work_day(&router, "EMP001", "2026-02-09", "09:00:00", "15:00:00").await;
    assert_eq!(record["status"], "present");
}

#[tokio::test]
async fn test_four_to_six_hours_classifies_half_day() {
    let (router, _) = create_router_with_employee();
    let record = work_day(&router, "EMP001", "2026-02-09", "09:00:00", "14:59:00").await;
    assert_eq!(record["status"], "half_day");
}

#[tokio::test]
async fn test_under_four_hours_classifies_absent() {
    let (router, _) = create_router_with_employee();
    let record = work_day(&router, "EMP001", "2026-02-09", "09:00:00", "12:59:24").await;
    assert_eq!(record["status"], "absent");
}

#[tokio::test]
async fn test_overnight_shift_rolls_over_midnight() {
    let (router, _) = create_router_with_employee();
    // 22:00 -> 06:00 is eight hours.
    let record = work_day(&router, "EMP001", "2026-02-09", "22:00:00", "06:00:00").await;
    assert_eq!(record["status"], "present");
}

#[tokio::test]
async fn test_check_out_without_check_in_conflicts() {
    let (router, _) = create_router_with_employee();
    let (status, error) =
        punch(&router, "/attendance/check-out", "EMP001", "2026-02-09", "18:00:00").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "NO_CHECK_IN");
}

#[tokio::test]
async fn test_manual_mark_bypasses_classification() {
    let (router, _) = create_router_with_employee();
    let (status, record) = send(
        &router,
        "POST",
        "/attendance/mark",
        json!({"employee_id": "EMP001", "date": "2026-02-09", "status": "half_day"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["status"], "half_day");
    assert_eq!(record["check_in"], "09:00:00");
    assert_eq!(record["check_out"], "13:00:00");
}

// =============================================================================
// Leave-aware merging
// =============================================================================

#[tokio::test]
async fn test_half_day_leave_with_half_work_is_full_day() {
    let (router, _) = create_router_with_employee();
    let id = apply_leave(
        &router,
        json!({
            "employee_id": "EMP001",
            "leave_type": "HALF_DAY",
            "session": "FIRST_HALF",
            "start_date": "2026-02-09",
            "end_date": "2026-02-09",
            "reason": "Appointment"
        }),
    )
    .await;
    approve_leave(&router, &id).await;

    // 4.5 hours worked in the afternoon.
    let record = work_day(&router, "EMP001", "2026-02-09", "14:00:00", "18:30:00").await;
    assert_eq!(record["status"], "present");
}

#[tokio::test]
async fn test_half_day_leave_with_too_little_work_is_half_day() {
    let (router, _) = create_router_with_employee();
    let id = apply_leave(
        &router,
        json!({
            "employee_id": "EMP001",
            "leave_type": "HALF_DAY",
            "session": "SECOND_HALF",
            "start_date": "2026-02-09",
            "end_date": "2026-02-09",
            "reason": "Appointment"
        }),
    )
    .await;
    approve_leave(&router, &id).await;

    // Only two hours worked.
    let record = work_day(&router, "EMP001", "2026-02-09", "09:00:00", "11:00:00").await;
    assert_eq!(record["status"], "half_day");
}

#[tokio::test]
async fn test_full_day_leave_credits_regardless_of_work() {
    let (router, _) = create_router_with_employee();
    let id = apply_leave(
        &router,
        json!({
            "employee_id": "EMP001",
            "leave_type": "CL",
            "start_date": "2026-02-09",
            "end_date": "2026-02-09",
            "reason": "Family function"
        }),
    )
    .await;
    approve_leave(&router, &id).await;

    // One hour of incidental work.
    let record = work_day(&router, "EMP001", "2026-02-09", "09:00:00", "10:00:00").await;
    assert_eq!(record["status"], "present");
}

// =============================================================================
// Leave ledger
// =============================================================================

#[tokio::test]
async fn test_leave_balance_sequence() {
    let (router, store) = create_router_with_employee();

    let first = apply_leave(
        &router,
        json!({
            "employee_id": "EMP001", "leave_type": "CL",
            "start_date": "2026-02-03", "end_date": "2026-02-03", "reason": "one"
        }),
    )
    .await;
    let second = apply_leave(
        &router,
        json!({
            "employee_id": "EMP001", "leave_type": "CL",
            "start_date": "2026-02-10", "end_date": "2026-02-10", "reason": "two"
        }),
    )
    .await;
    let third = apply_leave(
        &router,
        json!({
            "employee_id": "EMP001", "leave_type": "CL",
            "start_date": "2026-02-17", "end_date": "2026-02-17", "reason": "three"
        }),
    )
    .await;

    // First: 2 accrued, 1 debited, paid.
    let leave = approve_leave(&router, &first).await;
    assert_eq!(leave["is_paid"], true);
    assert_decimal_eq(&leave["days_count"], "1");

    // Second: balance exactly sufficient, paid, now zero.
    let leave = approve_leave(&router, &second).await;
    assert_eq!(leave["is_paid"], true);

    // Third: balance exhausted, approved but unpaid.
    let leave = approve_leave(&router, &third).await;
    assert_eq!(leave["is_paid"], false);

    let employee = store.employee("EMP001").unwrap().unwrap();
    assert_eq!(employee.leave_balance.days, Decimal::ZERO);
}

#[tokio::test]
async fn test_overlapping_leave_rejected() {
    let (router, _) = create_router_with_employee();
    apply_leave(
        &router,
        json!({
            "employee_id": "EMP001", "leave_type": "CL",
            "start_date": "2026-02-09", "end_date": "2026-02-11", "reason": "trip"
        }),
    )
    .await;

    let (status, error) = send(
        &router,
        "POST",
        "/leaves",
        json!({
            "employee_id": "EMP001", "leave_type": "SL",
            "start_date": "2026-02-11", "end_date": "2026-02-12", "reason": "fever"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "OVERLAPPING_LEAVE");
}

#[tokio::test]
async fn test_leave_review_is_terminal() {
    let (router, _) = create_router_with_employee();
    let id = apply_leave(
        &router,
        json!({
            "employee_id": "EMP001", "leave_type": "CL",
            "start_date": "2026-02-09", "end_date": "2026-02-09", "reason": "one"
        }),
    )
    .await;
    approve_leave(&router, &id).await;

    let (status, error) = send(
        &router,
        "POST",
        &format!("/leaves/{}/reject", id),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "LEAVE_ALREADY_REVIEWED");
}

// =============================================================================
// Payroll
// =============================================================================

async fn seed_reference_month(router: &Router) {
    // 20 present, 4 half days, 2 absents in February 2026.
    for day in 1..=20 {
        send(
            router,
            "POST",
            "/attendance/mark",
            json!({
                "employee_id": "EMP001",
                "date": format!("2026-02-{:02}", day),
                "status": "present"
            }),
        )
        .await;
    }
    for day in 21..=24 {
        send(
            router,
            "POST",
            "/attendance/mark",
            json!({
                "employee_id": "EMP001",
                "date": format!("2026-02-{:02}", day),
                "status": "half_day"
            }),
        )
        .await;
    }
    for day in 25..=26 {
        send(
            router,
            "POST",
            "/attendance/mark",
            json!({
                "employee_id": "EMP001",
                "date": format!("2026-02-{:02}", day),
                "status": "absent"
            }),
        )
        .await;
    }
}

#[tokio::test]
async fn test_payroll_reference_run() {
    let (router, _) = create_router_with_employee();
    seed_reference_month(&router).await;

    let (status, records) = send(
        &router,
        "POST",
        "/payroll/process",
        json!({"month": "2026-02", "working_days": 26}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let record = &records.as_array().unwrap()[0];
    assert_decimal_eq(&record["gross"], "22000");
    assert_decimal_eq(&record["net"], "22000");
    assert_decimal_eq(&record["basic"], "22000");
    assert_eq!(record["present_days"], 20);
    assert_eq!(record["half_days"], 4);
    assert_eq!(record["total_days"], 26);
    assert_eq!(record["working_days"], 26);
}

#[tokio::test]
async fn test_payroll_rerun_overwrites() {
    let (router, _) = create_router_with_employee();
    seed_reference_month(&router).await;

    let body = json!({"month": "2026-02", "working_days": 26});
    send(&router, "POST", "/payroll/process", body.clone()).await;
    send(&router, "POST", "/payroll/process", body).await;

    let (status, records) = get(&router, "/payroll/2026-02").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(records.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_payroll_with_adjustments_and_deductions() {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_employee(create_employee("EMP001", "26000", "1500"))
        .unwrap();
    let router = create_router(AppState::new(store, PolicyConfig::default()));

    for day in 1..=26 {
        send(
            &router,
            "POST",
            "/attendance/mark",
            json!({
                "employee_id": "EMP001",
                "date": format!("2026-02-{:02}", day),
                "status": "present"
            }),
        )
        .await;
    }

    let (status, records) = send(
        &router,
        "POST",
        "/payroll/process",
        json!({
            "month": "2026-02",
            "working_days": 26,
            "adjustments": {"EMP001": {"allowance": "1000", "deduction": "250"}}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let record = &records.as_array().unwrap()[0];
    // gross = 26000 + 1000; net = gross - 1500 - 250.
    assert_decimal_eq(&record["gross"], "27000");
    assert_decimal_eq(&record["net"], "25250");
    assert_decimal_eq(&record["ad_hoc_allowance"], "1000");
    assert_decimal_eq(&record["ad_hoc_deduction"], "250");
}

#[tokio::test]
async fn test_payroll_derives_working_days_from_holidays() {
    let (router, _) = create_router_with_employee();

    // January 2026: 27 non-Sundays; one weekday holiday leaves 26.
    let (status, _) = send(
        &router,
        "POST",
        "/holidays",
        json!({"date": "2026-01-26", "name": "Republic Day"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, records) = send(
        &router,
        "POST",
        "/payroll/process",
        json!({"month": "2026-01"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(records.as_array().unwrap()[0]["working_days"], 26);
}

#[tokio::test]
async fn test_leave_to_payroll_pipeline() {
    // A day on approved full-day leave becomes Present and is paid.
    let (router, _) = create_router_with_employee();

    let id = apply_leave(
        &router,
        json!({
            "employee_id": "EMP001", "leave_type": "CL",
            "start_date": "2026-02-02", "end_date": "2026-02-02", "reason": "family"
        }),
    )
    .await;
    approve_leave(&router, &id).await;
    // The employee punched one minute around the leave day anyway.
    work_day(&router, "EMP001", "2026-02-02", "09:00:00", "09:01:00").await;

    let (_, records) = send(
        &router,
        "POST",
        "/payroll/process",
        json!({"month": "2026-02", "working_days": 26}),
    )
    .await;
    let record = &records.as_array().unwrap()[0];
    assert_eq!(record["present_days"], 1);
    assert_decimal_eq(&record["gross"], "1000");
}

// =============================================================================
// Regularization
// =============================================================================

#[tokio::test]
async fn test_regularization_end_to_end() {
    let (router, _) = create_router_with_employee();

    // Punched out after 30 minutes by mistake.
    let record = work_day(&router, "EMP001", "2026-02-09", "09:00:00", "09:30:00").await;
    assert_eq!(record["status"], "absent");

    let (status, request) = send(
        &router,
        "POST",
        "/regularizations",
        json!({
            "employee_id": "EMP001",
            "date": "2026-02-09",
            "requested_check_out": "18:00:00",
            "reason": "Forgot to punch out"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = request["id"].as_str().unwrap();

    let (status, record) = send(
        &router,
        "POST",
        &format!("/regularizations/{}/approve", id),
        json!({"admin_remarks": "Verified"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["status"], "present");
    assert_eq!(record["check_in"], "09:00:00");
    assert_eq!(record["check_out"], "18:00:00");
}

// =============================================================================
// Glue CRUD
// =============================================================================

#[tokio::test]
async fn test_holiday_and_announcement_crud() {
    let (router, _) = create_router_with_employee();

    send(
        &router,
        "POST",
        "/holidays",
        json!({"date": "2026-01-26", "name": "Republic Day"}),
    )
    .await;
    let (_, holidays) = get(&router, "/holidays").await;
    assert_eq!(holidays.as_array().unwrap().len(), 1);

    let (status, announcement) = send(
        &router,
        "POST",
        "/announcements",
        json!({"title": "Offsite", "content": "Friday", "date": "2026-02-06"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = announcement["id"].as_str().unwrap();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/announcements/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_document_metadata_crud() {
    let (router, _) = create_router_with_employee();

    let (status, _) = send(
        &router,
        "POST",
        "/documents",
        json!({
            "employee_id": "EMP001",
            "file_name": "offer.pdf",
            "file_path": "documents/EMP001/offer.pdf",
            "document_type": "offer_letter"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, documents) = get(&router, "/employees/EMP001/documents").await;
    assert_eq!(documents.as_array().unwrap().len(), 1);
    assert_eq!(documents[0]["file_name"], "offer.pdf");
}

#[tokio::test]
async fn test_month_attendance_listing() {
    let (router, _) = create_router_with_employee();
    work_day(&router, "EMP001", "2026-02-09", "09:00:00", "18:00:00").await;
    work_day(&router, "EMP001", "2026-02-10", "09:00:00", "18:00:00").await;

    let (status, records) = get(&router, "/attendance/2026-02").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(records.as_array().unwrap().len(), 2);

    let (_, other_month) = get(&router, "/attendance/2026-03").await;
    assert!(other_month.as_array().unwrap().is_empty());
}
