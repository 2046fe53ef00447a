//! Weekly timesheet model.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Approval status of a timesheet.
///
/// Timesheets start `Pending` and move once to a terminal status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimesheetStatus {
    /// Awaiting a manager decision.
    #[default]
    Pending,
    /// Approved (terminal).
    Approved,
    /// Rejected (terminal).
    Rejected,
}

impl TimesheetStatus {
    /// Returns true for statuses that can no longer change.
    pub fn is_terminal(self) -> bool {
        !matches!(self, TimesheetStatus::Pending)
    }
}

impl fmt::Display for TimesheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimesheetStatus::Pending => write!(f, "Pending"),
            TimesheetStatus::Approved => write!(f, "Approved"),
            TimesheetStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// One employee's hours for a period, submitted for approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timesheet {
    /// Identifier (e.g., "TS-1007").
    pub id: String,
    /// The employee the hours belong to.
    pub employee_id: String,
    /// Display label of the period covered (e.g., "05-11 Aug").
    pub period: String,
    /// Hours worked in the period.
    pub hours: Decimal,
    /// Current status.
    #[serde(default)]
    pub status: TimesheetStatus,
}
