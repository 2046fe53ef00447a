//! Request types for the Time & Leave Engine API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculation::parse_form_date;
use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveSubmission, LeaveType, TaskType};

/// Request body for `POST /attendance/evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateAttendanceRequest {
    /// The employee to evaluate.
    pub employee_id: String,
    /// The instant to evaluate; the server clock's "now" when absent.
    #[serde(default)]
    pub instant: Option<DateTime<Utc>>,
}

/// Request body for `POST /leave/requests`.
///
/// Dates arrive as the raw form values; an empty string means the date was
/// not picked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveSubmissionRequest {
    /// The employee requesting leave.
    pub employee_id: String,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of leave (`YYYY-MM-DD`), or empty.
    #[serde(default)]
    pub start: String,
    /// Last day of leave (`YYYY-MM-DD`), or empty.
    #[serde(default)]
    pub end: String,
    /// Accept the request even when it exceeds the balance.
    #[serde(default)]
    pub cashout: bool,
}

/// Request body for `POST /projects`.
///
/// A missing code deserializes as empty and is refused when the project is
/// added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    /// Project code.
    #[serde(default)]
    pub code: String,
    /// Project name.
    #[serde(default)]
    pub name: String,
    /// Client short code.
    #[serde(default)]
    pub client: String,
}

/// Request body for `POST /timer/:employee_id/start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartTimerRequest {
    /// The project to log time against.
    pub project_code: String,
    /// The kind of work.
    pub task: TaskType,
}

impl LeaveSubmissionRequest {
    /// Parses the form values into a [`LeaveSubmission`].
    ///
    /// A blank field is reported as a missing range before either value is
    /// parsed, so `start: ""` with a malformed `end` is still a missing date.
    pub fn to_submission(&self) -> EngineResult<LeaveSubmission> {
        if self.start.trim().is_empty() || self.end.trim().is_empty() {
            return Err(EngineError::MissingDateRange);
        }
        Ok(LeaveSubmission {
            leave_type: self.leave_type,
            start_date: parse_form_date(&self.start)?,
            end_date: parse_form_date(&self.end)?,
            cashout: self.cashout,
        })
    }
}
