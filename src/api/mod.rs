//! HTTP API module for the Time & Leave Engine.
//!
//! This module exposes attendance evaluation, clock-in, work timer, team
//! attendance, leave, timesheet approval and project endpoints as JSON over
//! HTTP for the UI shell.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateProjectRequest, EvaluateAttendanceRequest, LeaveSubmissionRequest, StartTimerRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, BalanceResponse, ClockResponse, LeaveListResponse,
    TimerResponse, TimesheetListResponse,
};
pub use state::AppState;
