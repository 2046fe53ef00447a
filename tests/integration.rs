//! Integration tests for the Time & Leave Engine HTTP API.
//!
//! This test suite covers:
//! - Attendance evaluation at and around the lateness threshold
//! - Timezone handling per employee
//! - Clock-in toggling, explicit check-out and the team attendance summary
//! - Work timers against known projects
//! - Leave submission, balance validation, cash-out and holiday exclusion
//! - Leave and timesheet approver decisions
//! - Project administration
//! - Error cases

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;

use time_leave_engine::api::{AppState, create_router};
use time_leave_engine::clock::FixedClock;
use time_leave_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn instant(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

/// 08:10 in Melbourne and Sydney, 03:10 in Karachi.
const MORNING: &str = "2025-08-24T22:10:00Z";

fn create_router_at(now: &str) -> Router {
    let config = ConfigLoader::load("./config/sample").expect("Failed to load config");
    create_router(AppState::with_clock(
        config,
        Arc::new(FixedClock::new(instant(now))),
    ))
}

fn create_router_for_test() -> Router {
    create_router_at(MORNING)
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, "POST", uri, Some(body)).await
}

async fn post_empty(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, "POST", uri, None).await
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, "GET", uri, None).await
}

fn leave_form(employee_id: &str, start: &str, end: &str, cashout: bool) -> Value {
    json!({
        "employee_id": employee_id,
        "leave_type": "Annual",
        "start": start,
        "end": end,
        "cashout": cashout
    })
}

// =============================================================================
// Roster
// =============================================================================

#[tokio::test]
async fn test_list_employees() {
    let router = create_router_for_test();
    let (status, body) = get(&router, "/employees").await;

    assert_eq!(status, StatusCode::OK);
    let employees = body.as_array().unwrap();
    assert_eq!(employees.len(), 4);
    assert_eq!(employees[1]["name"], "Rizwan");
    assert_eq!(employees[1]["shift_start"], "08:00");
    assert_eq!(employees[2]["timezone"], "Asia/Karachi");
}

// =============================================================================
// Attendance evaluation
// =============================================================================

#[tokio::test]
async fn test_check_in_exactly_at_threshold_is_on_time() {
    let router = create_router_for_test();
    let (status, body) = post(
        &router,
        "/attendance/evaluate",
        json!({ "employee_id": "E1001", "instant": "2025-08-24T22:05:00Z" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["late"], false);
    assert_eq!(body["local_time"], "08:05:00");
    assert_eq!(body["threshold_minutes"], 485);
}

#[tokio::test]
async fn test_check_in_one_minute_after_threshold_is_late() {
    let router = create_router_for_test();
    let (status, body) = post(
        &router,
        "/attendance/evaluate",
        json!({ "employee_id": "E1001", "instant": "2025-08-24T22:06:00Z" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["late"], true);
    assert_eq!(body["minutes_since_midnight"], 486);
}

#[tokio::test]
async fn test_evaluate_defaults_to_clock_now() {
    let router = create_router_for_test();

    let (_, rizwan) =
        post(&router, "/attendance/evaluate", json!({ "employee_id": "E1001" })).await;
    assert_eq!(rizwan["local_time"], "08:10:00");
    assert_eq!(rizwan["late"], true);

    // Same instant, but only 03:10 in Karachi
    let (_, hira) =
        post(&router, "/attendance/evaluate", json!({ "employee_id": "E1002" })).await;
    assert_eq!(hira["local_time"], "03:10:00");
    assert_eq!(hira["late"], false);
}

#[tokio::test]
async fn test_evaluate_twice_is_identical() {
    let router = create_router_for_test();
    let body = json!({ "employee_id": "E1003", "instant": "2025-08-24T22:31:00Z" });

    let (_, first) = post(&router, "/attendance/evaluate", body.clone()).await;
    let (_, second) = post(&router, "/attendance/evaluate", body).await;
    assert_eq!(first, second);
    assert_eq!(first["late"], true);
}

#[tokio::test]
async fn test_evaluate_unknown_employee() {
    let router = create_router_for_test();
    let (status, body) =
        post(&router, "/attendance/evaluate", json!({ "employee_id": "E9999" })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_evaluate_missing_field() {
    let router = create_router_for_test();
    let (status, body) = post(&router, "/attendance/evaluate", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Clock-in and team attendance
// =============================================================================

#[tokio::test]
async fn test_toggle_checks_in_then_out() {
    let router = create_router_for_test();

    let (status, body) = post_empty(&router, "/clock/E1001/toggle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event"], "checked_in");
    assert_eq!(body["status"], "late");

    let (_, body) = post_empty(&router, "/clock/E1001/toggle").await;
    assert_eq!(body["event"], "checked_out");
    assert_eq!(body["status"], "not_checked_in");
    assert_eq!(body["session"]["late"], true);
}

#[tokio::test]
async fn test_check_out_requires_open_check_in() {
    let router = create_router_for_test();

    let (status, body) = post_empty(&router, "/clock/E1003/check-out").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "NOT_CHECKED_IN");

    post_empty(&router, "/clock/E1003/toggle").await;
    let (status, body) = post_empty(&router, "/clock/E1003/check-out").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event"], "checked_out");
    assert_eq!(body["status"], "not_checked_in");
    assert_eq!(body["session"]["time_out"], MORNING);

    // Checking out twice is refused; the toggle checks back in instead
    let (status, _) = post_empty(&router, "/clock/E1003/check-out").await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (_, body) = post_empty(&router, "/clock/E1003/toggle").await;
    assert_eq!(body["event"], "checked_in");
}

#[tokio::test]
async fn test_break_adds_fifteen_minutes() {
    let router = create_router_for_test();
    post_empty(&router, "/clock/E1002/break").await;
    let (status, body) = post_empty(&router, "/clock/E1002/break").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["break_minutes"], 30);
    assert!(body.get("event").is_none());
}

#[tokio::test]
async fn test_team_attendance_reflects_check_ins() {
    let router = create_router_for_test();
    post_empty(&router, "/clock/E1001/toggle").await; // 08:10 Melbourne, late
    post_empty(&router, "/clock/E1003/toggle").await; // 08:10 Sydney, shift 08:30, on time

    let (status, body) = get(&router, "/team/attendance").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["late_arrivals"], 1);
    assert_eq!(body["on_time"], 1);
    assert_eq!(body["not_checked_in"], 2);

    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries[1]["status"], "late");
    assert_eq!(entries[1]["checked_in_at"], "08:10:00");
    assert_eq!(entries[2]["status"], "not_checked_in");
    assert_eq!(entries[3]["status"], "on_time");
}

#[tokio::test]
async fn test_toggle_unknown_employee() {
    let router = create_router_for_test();
    let (status, _) = post_empty(&router, "/clock/E9999/toggle").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Leave
// =============================================================================

#[tokio::test]
async fn test_seeded_history_is_listed() {
    let router = create_router_for_test();
    let (status, body) = get(&router, "/leave/requests").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["requests"].as_array().unwrap().len(), 2);
    assert_eq!(body["open_count"], 0);
}

#[tokio::test]
async fn test_submit_within_balance() {
    let router = create_router_for_test();
    let (status, body) = post(
        &router,
        "/leave/requests",
        leave_form("E1001", "2025-08-25", "2025-08-29", false),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "L-003");
    assert_eq!(body["days"], 5);
    assert_eq!(body["status"], "Submitted");

    let (_, list) = get(&router, "/leave/requests").await;
    assert_eq!(list["requests"][0]["id"], "L-003");
    assert_eq!(list["open_count"], 1);
}

#[tokio::test]
async fn test_submit_over_balance_is_rejected() {
    let router = create_router_for_test();
    let (status, body) = post(
        &router,
        "/leave/requests",
        leave_form("E1002", "2025-08-25", "2025-08-29", false),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INSUFFICIENT_BALANCE");

    let (_, list) = get(&router, "/leave/requests").await;
    assert_eq!(list["requests"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_submit_over_balance_with_cashout() {
    let router = create_router_for_test();
    let (status, body) = post(
        &router,
        "/leave/requests",
        leave_form("E1002", "2025-08-25", "2025-08-29", true),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["days"], 5);
    assert_eq!(body["cashout"], true);
}

#[tokio::test]
async fn test_balance_is_not_reduced_by_submission() {
    let router = create_router_for_test();
    post(
        &router,
        "/leave/requests",
        leave_form("E1001", "2025-09-01", "2025-09-03", false),
    )
    .await;

    let (status, body) = get(&router, "/leave/balance/E1001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], "12");
}

#[tokio::test]
async fn test_submit_with_missing_date() {
    let router = create_router_for_test();

    for form in [
        leave_form("E1001", "", "2025-08-29", false),
        leave_form("E1001", "2025-08-25", "", false),
        leave_form("E1001", "", "garbage", false),
        leave_form("E1001", "garbage", " ", false),
    ] {
        let (status, body) = post(&router, "/leave/requests", form).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MISSING_DATE_RANGE");
    }

    let (_, list) = get(&router, "/leave/requests").await;
    assert_eq!(list["requests"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_submit_over_public_holidays_excludes_them() {
    let router = create_router_for_test();
    // 22-28 Dec is seven calendar days; Christmas and Boxing Day are not counted
    let (status, body) = post(
        &router,
        "/leave/requests",
        leave_form("E1001", "2025-12-22", "2025-12-28", false),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["days"], 5);
}

#[tokio::test]
async fn test_holidays_can_bring_request_within_balance() {
    let router = create_router_for_test();
    // Hira holds 3 days; 24-27 Dec is four calendar days but only two leave days
    let (status, body) = post(
        &router,
        "/leave/requests",
        leave_form("E1002", "2025-12-24", "2025-12-27", false),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["days"], 2);
}

#[tokio::test]
async fn test_submit_reversed_range() {
    let router = create_router_for_test();
    let (status, body) = post(
        &router,
        "/leave/requests",
        leave_form("E1001", "2025-07-03", "2025-07-02", false),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_submit_malformed_date() {
    let router = create_router_for_test();
    let (status, body) = post(
        &router,
        "/leave/requests",
        leave_form("E1001", "25/08/2025", "2025-08-29", false),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE");
}

#[tokio::test]
async fn test_approve_then_reject_conflicts() {
    let router = create_router_for_test();
    post(
        &router,
        "/leave/requests",
        leave_form("E1001", "2025-07-02", "2025-07-03", false),
    )
    .await;

    let (status, body) = post_empty(&router, "/leave/requests/L-003/approve").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Approved");

    let (status, body) = post_empty(&router, "/leave/requests/L-003/reject").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATUS_TRANSITION");
}

#[tokio::test]
async fn test_reject_submitted_request() {
    let router = create_router_for_test();
    post(
        &router,
        "/leave/requests",
        leave_form("E1003", "2025-10-06", "2025-10-07", false),
    )
    .await;

    let (status, body) = post_empty(&router, "/leave/requests/L-003/reject").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Rejected");
}

#[tokio::test]
async fn test_decide_unknown_request() {
    let router = create_router_for_test();
    let (status, body) = post_empty(&router, "/leave/requests/L-404/approve").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "LEAVE_REQUEST_NOT_FOUND");
}

// =============================================================================
// Timesheets
// =============================================================================

#[tokio::test]
async fn test_seeded_timesheets_are_pending() {
    let router = create_router_for_test();
    let (status, body) = get(&router, "/timesheets").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pending_count"], 2);
    let timesheets = body["timesheets"].as_array().unwrap();
    assert_eq!(timesheets[0]["id"], "TS-1007");
    assert_eq!(timesheets[0]["hours"], "39.5");
    assert_eq!(timesheets[1]["employee_id"], "E1002");
}

#[tokio::test]
async fn test_timesheet_approval_is_one_way() {
    let router = create_router_for_test();

    let (status, body) = post_empty(&router, "/timesheets/TS-1007/approve").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Approved");

    let (status, body) = post_empty(&router, "/timesheets/TS-1007/reject").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATUS_TRANSITION");

    let (status, body) = post_empty(&router, "/timesheets/TS-1008/reject").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Rejected");

    let (_, list) = get(&router, "/timesheets").await;
    assert_eq!(list["pending_count"], 0);
}

#[tokio::test]
async fn test_decide_unknown_timesheet() {
    let router = create_router_for_test();
    let (status, body) = post_empty(&router, "/timesheets/TS-0001/approve").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TIMESHEET_NOT_FOUND");
}

// =============================================================================
// Projects
// =============================================================================

#[tokio::test]
async fn test_list_projects() {
    let router = create_router_for_test();
    let (status, body) = get(&router, "/projects").await;

    assert_eq!(status, StatusCode::OK);
    let projects = body.as_array().unwrap();
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0]["code"], "01-MEL-01-0007");
    assert_eq!(projects[0]["hours"], "126");
}

#[tokio::test]
async fn test_create_project_is_listed_first_with_zero_hours() {
    let router = create_router_for_test();
    let (status, body) = post(
        &router,
        "/projects",
        json!({ "code": "01-SYD-01-0040", "name": "Harbour Stairs", "client": "HBS" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["hours"], "0");

    let (_, list) = get(&router, "/projects").await;
    assert_eq!(list.as_array().unwrap().len(), 4);
    assert_eq!(list[0]["code"], "01-SYD-01-0040");
}

#[tokio::test]
async fn test_create_project_without_code() {
    let router = create_router_for_test();

    for body in [
        json!({ "name": "Harbour Stairs", "client": "HBS" }),
        json!({ "code": "  ", "name": "Harbour Stairs", "client": "HBS" }),
    ] {
        let (status, response) = post(&router, "/projects", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["code"], "MISSING_PROJECT_CODE");
    }

    let (_, list) = get(&router, "/projects").await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_duplicate_project() {
    let router = create_router_for_test();
    let (status, body) = post(
        &router,
        "/projects",
        json!({ "code": "01-MEL-01-0019", "name": "Keystone Again", "client": "KST" }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_PROJECT");
}

// =============================================================================
// Work timer
// =============================================================================

#[tokio::test]
async fn test_timer_start_status_stop() {
    let router = create_router_for_test();

    let (status, body) = get(&router, "/timer/E1002").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["active"].is_null());
    assert_eq!(body["elapsed"], "00:00:00");

    let (status, body) = post(
        &router,
        "/timer/E1002/start",
        json!({ "project_code": "01-SYD-01-0032", "task": "CAD" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"]["project_code"], "01-SYD-01-0032");
    assert_eq!(body["active"]["task"], "CAD");
    assert_eq!(body["active"]["started"], MORNING);

    // A second start keeps the running entry
    let (_, body) = post(
        &router,
        "/timer/E1002/start",
        json!({ "project_code": "01-MEL-01-0007", "task": "Review" }),
    )
    .await;
    assert_eq!(body["active"]["project_code"], "01-SYD-01-0032");

    let (_, body) = get(&router, "/timer/E1002").await;
    assert_eq!(body["active"]["task"], "CAD");

    let (status, body) = post_empty(&router, "/timer/E1002/stop").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["active"].is_null());
    assert_eq!(body["elapsed_seconds"], 0);
}

#[tokio::test]
async fn test_timer_rejects_unknown_project() {
    let router = create_router_for_test();
    let (status, body) = post(
        &router,
        "/timer/E1001/start",
        json!({ "project_code": "99-NOPE-00-0000", "task": "Design" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PROJECT_NOT_FOUND");

    let (_, body) = get(&router, "/timer/E1001").await;
    assert!(body["active"].is_null());
}

#[tokio::test]
async fn test_timer_accepts_newly_created_project() {
    let router = create_router_for_test();
    post(
        &router,
        "/projects",
        json!({ "code": "01-BNE-01-0001", "name": "Riverside Pergola", "client": "RVP" }),
    )
    .await;

    let (status, body) = post(
        &router,
        "/timer/E1001/start",
        json!({ "project_code": "01-BNE-01-0001", "task": "RFI" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"]["task"], "RFI");
}

#[tokio::test]
async fn test_timer_unknown_employee() {
    let router = create_router_for_test();
    let (status, body) = post_empty(&router, "/timer/E9999/stop").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_json() {
    let router = create_router_for_test();
    let request = Request::builder()
        .method("POST")
        .uri("/leave/requests")
        .header("Content-Type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
