//! Leave request model and related types.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    /// Annual (vacation) leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Any other leave.
    Misc,
}

/// Lifecycle status of a leave request.
///
/// Requests start as `Submitted` and move once to a terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    /// Awaiting an approver decision.
    Submitted,
    /// Approved by an approver (terminal).
    Approved,
    /// Rejected by an approver (terminal).
    Rejected,
}

impl LeaveStatus {
    /// Returns true for statuses that can no longer change.
    pub fn is_terminal(self) -> bool {
        !matches!(self, LeaveStatus::Submitted)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveStatus::Submitted => write!(f, "Submitted"),
            LeaveStatus::Approved => write!(f, "Approved"),
            LeaveStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// A leave request as recorded in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Sequential identifier (e.g., "L-003").
    pub id: String,
    /// The employee the request belongs to.
    pub employee_id: String,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Number of leave days counted for the range.
    pub days: u32,
    /// Whether the request was submitted with a cash-out override.
    #[serde(default)]
    pub cashout: bool,
    /// Current status.
    pub status: LeaveStatus,
}

/// The form values for a new leave request.
///
/// Dates are optional because the form can be submitted before both are
/// picked; submission rejects a missing date with
/// [`EngineError::MissingDateRange`](crate::error::EngineError::MissingDateRange).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveSubmission {
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of leave, if picked.
    pub start_date: Option<NaiveDate>,
    /// Last day of leave, if picked.
    pub end_date: Option<NaiveDate>,
    /// Accept the request even when it exceeds the balance.
    pub cashout: bool,
}
