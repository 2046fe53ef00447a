//! Response types for the Time & Leave Engine API.
//!
//! This module defines the response bodies and the error handling for the
//! HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    ActiveEntry, AttendanceStatus, ClockEvent, ClockSession, LeaveRequest, Timesheet,
};

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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the error for a leave range whose end precedes its start.
    pub fn invalid_date_range(start: impl std::fmt::Display, end: impl std::fmt::Display) -> Self {
        Self::with_details(
            "INVALID_DATE_RANGE",
            format!("End date {} is before start date {}", end, start),
            "Pick an end date on or after the start date",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::EmployeeNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("EMPLOYEE_NOT_FOUND", message),
            ),
            EngineError::MissingDateRange => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "MISSING_DATE_RANGE",
                    message,
                    "Pick both a start and an end date",
                ),
            ),
            EngineError::InvalidDate { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_DATE", message),
            ),
            EngineError::InsufficientBalance { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INSUFFICIENT_BALANCE",
                    message,
                    "Shorten the request or tick cash-out",
                ),
            ),
            EngineError::LeaveRequestNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("LEAVE_REQUEST_NOT_FOUND", message),
            ),
            EngineError::InvalidStatusTransition { .. } => (
                StatusCode::CONFLICT,
                ApiError::new("INVALID_STATUS_TRANSITION", message),
            ),
            EngineError::NotCheckedIn { .. } => (
                StatusCode::CONFLICT,
                ApiError::new("NOT_CHECKED_IN", message),
            ),
            EngineError::TimesheetNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("TIMESHEET_NOT_FOUND", message),
            ),
            EngineError::ProjectNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("PROJECT_NOT_FOUND", message),
            ),
            EngineError::MissingProjectCode => (
                StatusCode::BAD_REQUEST,
                ApiError::new("MISSING_PROJECT_CODE", message),
            ),
            EngineError::DuplicateProject { .. } => (
                StatusCode::CONFLICT,
                ApiError::new("DUPLICATE_PROJECT", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}

/// Body of the clock toggle and break endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockResponse {
    /// The employee.
    pub employee_id: String,
    /// What the toggle did; absent for break updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<ClockEvent>,
    /// Resulting status.
    pub status: AttendanceStatus,
    /// Full session state.
    pub session: ClockSession,
}

/// Body of the leave list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveListResponse {
    /// Requests, newest first.
    pub requests: Vec<LeaveRequest>,
    /// Requests awaiting a decision.
    pub open_count: usize,
}

/// Body of the timesheet list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetListResponse {
    /// Timesheets in seeded order.
    pub timesheets: Vec<Timesheet>,
    /// Timesheets awaiting a decision.
    pub pending_count: usize,
}

/// Body of the work timer endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    /// The employee.
    pub employee_id: String,
    /// The running entry; absent when idle.
    pub active: Option<ActiveEntry>,
    /// Seconds on the running entry, or on the entry just stopped.
    pub elapsed_seconds: i64,
    /// `elapsed_seconds` as `HH:MM:SS`.
    pub elapsed: String,
}

/// Body of the leave balance endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// The employee.
    pub employee_id: String,
    /// Days available. Display-only; never reduced by submissions.
    pub balance: Decimal,
}
