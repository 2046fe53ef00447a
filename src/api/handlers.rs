//! HTTP request handlers for the Time & Leave Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{evaluate_attendance, summarize_team};
use crate::error::EngineError;
use crate::models::{ClockEvent, WorkTimer, format_elapsed};

use super::request::{
    CreateProjectRequest, EvaluateAttendanceRequest, LeaveSubmissionRequest, StartTimerRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, BalanceResponse, ClockResponse, LeaveListResponse,
    TimerResponse, TimesheetListResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees_handler))
        .route("/attendance/evaluate", post(evaluate_attendance_handler))
        .route("/clock/:employee_id/toggle", post(toggle_clock_handler))
        .route("/clock/:employee_id/check-out", post(check_out_handler))
        .route("/clock/:employee_id/break", post(take_break_handler))
        .route("/timer/:employee_id", get(timer_status_handler))
        .route("/timer/:employee_id/start", post(start_timer_handler))
        .route("/timer/:employee_id/stop", post(stop_timer_handler))
        .route("/team/attendance", get(team_attendance_handler))
        .route(
            "/projects",
            get(list_projects_handler).post(create_project_handler),
        )
        .route(
            "/leave/requests",
            get(list_leave_handler).post(submit_leave_handler),
        )
        .route("/leave/requests/:id/approve", post(approve_leave_handler))
        .route("/leave/requests/:id/reject", post(reject_leave_handler))
        .route("/leave/balance/:employee_id", get(leave_balance_handler))
        .route("/timesheets", get(list_timesheets_handler))
        .route("/timesheets/:id/approve", post(approve_timesheet_handler))
        .route("/timesheets/:id/reject", post(reject_timesheet_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

fn engine_error_response(correlation_id: Uuid, err: EngineError, action: &str) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "{} failed",
        action
    );
    error_response(err.into())
}

/// Maps a JSON body rejection onto the API error format.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    error_response(ApiErrorResponse::bad_request(error))
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().employees())
}

/// Handler for POST /attendance/evaluate.
///
/// Evaluates the given instant, or the server clock's "now", against the
/// employee's shift.
async fn evaluate_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateAttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let employee = match state.config().get_employee(&request.employee_id) {
        Ok(employee) => employee,
        Err(err) => return engine_error_response(correlation_id, err, "Attendance evaluation"),
    };

    let instant = request.instant.unwrap_or_else(|| state.clock().now());
    let check = evaluate_attendance(employee, instant);
    info!(
        correlation_id = %correlation_id,
        employee_id = %check.employee_id,
        local_time = %check.local_time,
        late = check.late,
        "Attendance evaluated"
    );
    json_response(StatusCode::OK, check)
}

/// Handler for POST /clock/:employee_id/toggle.
async fn toggle_clock_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let employee = match state.config().get_employee(&employee_id) {
        Ok(employee) => employee,
        Err(err) => return engine_error_response(correlation_id, err, "Clock toggle"),
    };

    let now = state.clock().now();
    let mut sessions = state.sessions().lock().await;
    let session = sessions.entry(employee_id.clone()).or_default();
    let event = match session.toggle(employee, now) {
        Ok(event) => event,
        Err(err) => return engine_error_response(correlation_id, err, "Clock toggle"),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        event = ?event,
        late = session.late,
        "Clock toggled"
    );

    json_response(
        StatusCode::OK,
        ClockResponse {
            employee_id,
            event: Some(event),
            status: session.status(),
            session: session.clone(),
        },
    )
}

/// Handler for POST /clock/:employee_id/check-out.
///
/// Unlike the toggle, this never checks in: without an open check-in it
/// fails with `NOT_CHECKED_IN`.
async fn check_out_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    if let Err(err) = state.config().get_employee(&employee_id) {
        return engine_error_response(correlation_id, err, "Check-out");
    }

    let now = state.clock().now();
    let mut sessions = state.sessions().lock().await;
    let session = sessions.entry(employee_id.clone()).or_default();
    if let Err(err) = session.check_out(&employee_id, now) {
        return engine_error_response(correlation_id, err, "Check-out");
    }

    info!(correlation_id = %correlation_id, employee_id = %employee_id, "Checked out");

    json_response(
        StatusCode::OK,
        ClockResponse {
            employee_id,
            event: Some(ClockEvent::CheckedOut),
            status: session.status(),
            session: session.clone(),
        },
    )
}

/// Handler for POST /clock/:employee_id/break.
async fn take_break_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    if let Err(err) = state.config().get_employee(&employee_id) {
        return engine_error_response(correlation_id, err, "Break");
    }

    let mut sessions = state.sessions().lock().await;
    let session = sessions.entry(employee_id.clone()).or_default();
    session.take_break();

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        break_minutes = session.break_minutes,
        "Break recorded"
    );

    json_response(
        StatusCode::OK,
        ClockResponse {
            employee_id,
            event: None,
            status: session.status(),
            session: session.clone(),
        },
    )
}

fn timer_response(employee_id: String, timer: &WorkTimer, elapsed_seconds: i64) -> Response {
    json_response(
        StatusCode::OK,
        TimerResponse {
            employee_id,
            active: timer.active().cloned(),
            elapsed_seconds,
            elapsed: format_elapsed(elapsed_seconds),
        },
    )
}

/// Handler for GET /timer/:employee_id.
async fn timer_status_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    if let Err(err) = state.config().get_employee(&employee_id) {
        return engine_error_response(correlation_id, err, "Timer lookup");
    }

    let now = state.clock().now();
    let timers = state.timers().lock().await;
    let timer = timers.get(&employee_id).cloned().unwrap_or_default();
    let elapsed = timer.elapsed_seconds(now);
    timer_response(employee_id, &timer, elapsed)
}

/// Handler for POST /timer/:employee_id/start.
///
/// Starting while an entry is running leaves that entry in place.
async fn start_timer_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<StartTimerRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = state.config().get_employee(&employee_id) {
        return engine_error_response(correlation_id, err, "Timer start");
    }
    if let Err(err) = state.projects().lock().await.get(&request.project_code) {
        return engine_error_response(correlation_id, err, "Timer start");
    }

    let now = state.clock().now();
    let mut timers = state.timers().lock().await;
    let timer = timers.entry(employee_id.clone()).or_default();
    timer.start(request.project_code, request.task, now);

    if let Some(entry) = timer.active() {
        info!(
            correlation_id = %correlation_id,
            employee_id = %employee_id,
            project_code = %entry.project_code,
            task = ?entry.task,
            "Timer running"
        );
    }

    let elapsed = timer.elapsed_seconds(now);
    timer_response(employee_id, timer, elapsed)
}

/// Handler for POST /timer/:employee_id/stop.
///
/// Stopping an idle timer reports zero elapsed seconds.
async fn stop_timer_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    if let Err(err) = state.config().get_employee(&employee_id) {
        return engine_error_response(correlation_id, err, "Timer stop");
    }

    let now = state.clock().now();
    let mut timers = state.timers().lock().await;
    let timer = timers.entry(employee_id.clone()).or_default();
    let elapsed = timer.stop(now).unwrap_or(0);

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        elapsed_seconds = elapsed,
        "Timer stopped"
    );

    timer_response(employee_id, timer, elapsed)
}

/// Handler for GET /team/attendance.
async fn team_attendance_handler(State(state): State<AppState>) -> Response {
    let now = state.clock().now();
    let sessions = state.sessions().lock().await;
    let summary = summarize_team(state.config().employees(), &sessions, now);
    json_response(StatusCode::OK, summary)
}

/// Handler for GET /leave/requests.
async fn list_leave_handler(State(state): State<AppState>) -> Response {
    let ledger = state.ledger().lock().await;
    json_response(
        StatusCode::OK,
        LeaveListResponse {
            requests: ledger.requests(),
            open_count: ledger.open_count(),
        },
    )
}

/// Handler for POST /leave/requests.
///
/// Validates the form and records a `Submitted` request. A range whose end
/// precedes its start is refused here; the day counter itself would count it
/// as zero days.
async fn submit_leave_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveSubmissionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave submission");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    if let Err(err) = config.get_employee(&request.employee_id) {
        return engine_error_response(correlation_id, err, "Leave submission");
    }

    let submission = match request.to_submission() {
        Ok(submission) => submission,
        Err(err) => return engine_error_response(correlation_id, err, "Leave submission"),
    };

    if let (Some(start), Some(end)) = (submission.start_date, submission.end_date) {
        if end < start {
            warn!(
                correlation_id = %correlation_id,
                start = %start,
                end = %end,
                "Leave range ends before it starts"
            );
            return error_response(ApiErrorResponse::bad_request(ApiError::invalid_date_range(
                start, end,
            )));
        }
    }

    let balance = config.leave_balance(&request.employee_id);
    let mut ledger = state.ledger().lock().await;
    match ledger.submit(
        &request.employee_id,
        &submission,
        balance,
        config.holidays(),
    ) {
        Ok(leave) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %leave.id,
                employee_id = %leave.employee_id,
                days = leave.days,
                "Leave submission accepted"
            );
            json_response(StatusCode::CREATED, leave)
        }
        Err(err) => engine_error_response(correlation_id, err, "Leave submission"),
    }
}

/// Handler for POST /leave/requests/:id/approve.
async fn approve_leave_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let mut ledger = state.ledger().lock().await;
    match ledger.approve(&id) {
        Ok(leave) => json_response(StatusCode::OK, leave),
        Err(err) => engine_error_response(correlation_id, err, "Leave approval"),
    }
}

/// Handler for POST /leave/requests/:id/reject.
async fn reject_leave_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let mut ledger = state.ledger().lock().await;
    match ledger.reject(&id) {
        Ok(leave) => json_response(StatusCode::OK, leave),
        Err(err) => engine_error_response(correlation_id, err, "Leave rejection"),
    }
}

/// Handler for GET /projects.
async fn list_projects_handler(State(state): State<AppState>) -> Response {
    let projects = state.projects().lock().await;
    json_response(StatusCode::OK, projects.projects())
}

/// Handler for POST /projects.
///
/// New projects are listed first with zero hours logged.
async fn create_project_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let mut projects = state.projects().lock().await;
    match projects.add(&request.code, request.name, request.client) {
        Ok(project) => json_response(StatusCode::CREATED, project),
        Err(err) => engine_error_response(correlation_id, err, "Project creation"),
    }
}

/// Handler for GET /timesheets.
async fn list_timesheets_handler(State(state): State<AppState>) -> Response {
    let timesheets = state.timesheets().lock().await;
    json_response(
        StatusCode::OK,
        TimesheetListResponse {
            timesheets: timesheets.timesheets().to_vec(),
            pending_count: timesheets.pending_count(),
        },
    )
}

/// Handler for POST /timesheets/:id/approve.
async fn approve_timesheet_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let mut timesheets = state.timesheets().lock().await;
    match timesheets.approve(&id) {
        Ok(timesheet) => json_response(StatusCode::OK, timesheet),
        Err(err) => engine_error_response(correlation_id, err, "Timesheet approval"),
    }
}

/// Handler for POST /timesheets/:id/reject.
async fn reject_timesheet_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let mut timesheets = state.timesheets().lock().await;
    match timesheets.reject(&id) {
        Ok(timesheet) => json_response(StatusCode::OK, timesheet),
        Err(err) => engine_error_response(correlation_id, err, "Timesheet rejection"),
    }
}

/// Handler for GET /leave/balance/:employee_id.
async fn leave_balance_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    if let Err(err) = state.config().get_employee(&employee_id) {
        return engine_error_response(correlation_id, err, "Balance lookup");
    }
    let balance = state.config().leave_balance(&employee_id);
    json_response(
        StatusCode::OK,
        BalanceResponse {
            employee_id,
            balance,
        },
    )
}
