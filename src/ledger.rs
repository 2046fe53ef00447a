//! In-memory leave and timesheet ledgers.
//!
//! The [`LeaveLedger`] records submitted leave requests, assigns sequential
//! identifiers and applies approver decisions. Balances are display-only and
//! are never reduced by the ledger. The [`TimesheetLedger`] holds timesheets
//! awaiting a manager's approval.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::calculation::assess_leave;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    HolidayCalendar, LeaveRequest, LeaveStatus, LeaveSubmission, Timesheet, TimesheetStatus,
};

/// Prefix of leave request identifiers.
pub const LEAVE_ID_PREFIX: &str = "L-";

/// Formats the `sequence`-th leave request identifier (`L-001`, `L-002`, ...).
pub fn format_leave_id(sequence: u32) -> String {
    format!("{}{:03}", LEAVE_ID_PREFIX, sequence)
}

/// Leave requests held in memory, newest last.
#[derive(Debug, Clone, Default)]
pub struct LeaveLedger {
    requests: Vec<LeaveRequest>,
    last_sequence: u32,
}

impl LeaveLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger holding historical requests.
    ///
    /// New identifiers continue after the highest `L-NNN` sequence seen, and
    /// never fall below the number of seeded requests.
    pub fn with_history(history: Vec<LeaveRequest>) -> Self {
        let highest = history
            .iter()
            .filter_map(|r| r.id.strip_prefix(LEAVE_ID_PREFIX))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        let last_sequence = highest.max(history.len() as u32);
        Self {
            requests: history,
            last_sequence,
        }
    }

    /// Validates and records a leave submission for `employee_id`.
    ///
    /// On success the new request has status `Submitted`. On failure nothing
    /// is recorded and no identifier is consumed.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingDateRange`] when a date is missing
    /// - [`EngineError::InsufficientBalance`] when the days exceed `balance`
    ///   without cash-out
    ///
    /// # Example
    ///
    /// ```
    /// use time_leave_engine::ledger::LeaveLedger;
    /// use time_leave_engine::models::{HolidayCalendar, LeaveStatus, LeaveSubmission, LeaveType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let mut ledger = LeaveLedger::new();
    /// let submission = LeaveSubmission {
    ///     leave_type: LeaveType::Sick,
    ///     start_date: NaiveDate::from_ymd_opt(2025, 7, 2),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 7, 3),
    ///     cashout: false,
    /// };
    ///
    /// let calendar = HolidayCalendar::default();
    /// let request = ledger.submit("E1001", &submission, Decimal::new(12, 0), &calendar)?;
    /// assert_eq!(request.id, "L-001");
    /// assert_eq!(request.days, 2);
    /// assert_eq!(request.status, LeaveStatus::Submitted);
    /// # Ok::<(), time_leave_engine::error::EngineError>(())
    /// ```
    pub fn submit(
        &mut self,
        employee_id: &str,
        submission: &LeaveSubmission,
        balance: Decimal,
        calendar: &HolidayCalendar,
    ) -> EngineResult<LeaveRequest> {
        let assessment = assess_leave(submission, balance, calendar)?;

        if assessment.exceeds_balance {
            // Cash-out has no upper bound; surface it for review.
            warn!(
                employee_id,
                days = assessment.days,
                balance = %balance,
                "Leave accepted over balance via cash-out"
            );
        }

        self.last_sequence += 1;
        let request = LeaveRequest {
            id: format_leave_id(self.last_sequence),
            employee_id: employee_id.to_string(),
            leave_type: submission.leave_type,
            start_date: assessment.start_date,
            end_date: assessment.end_date,
            days: assessment.days,
            cashout: submission.cashout,
            status: LeaveStatus::Submitted,
        };

        info!(
            request_id = %request.id,
            employee_id,
            days = request.days,
            "Leave request submitted"
        );

        self.requests.push(request.clone());
        Ok(request)
    }

    /// Approves a submitted request.
    pub fn approve(&mut self, id: &str) -> EngineResult<LeaveRequest> {
        self.decide(id, LeaveStatus::Approved)
    }

    /// Rejects a submitted request.
    pub fn reject(&mut self, id: &str) -> EngineResult<LeaveRequest> {
        self.decide(id, LeaveStatus::Rejected)
    }

    fn decide(&mut self, id: &str, to: LeaveStatus) -> EngineResult<LeaveRequest> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::LeaveRequestNotFound { id: id.to_string() })?;

        if request.status.is_terminal() {
            return Err(EngineError::InvalidStatusTransition {
                id: id.to_string(),
                from: request.status.to_string(),
                to: to.to_string(),
            });
        }

        request.status = to;
        info!(request_id = %id, status = %to, "Leave request decided");
        Ok(request.clone())
    }

    /// Looks up a request by identifier.
    pub fn get(&self, id: &str) -> Option<&LeaveRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// All requests, newest first.
    pub fn requests(&self) -> Vec<LeaveRequest> {
        self.requests.iter().rev().cloned().collect()
    }

    /// One employee's requests, newest first.
    pub fn requests_for(&self, employee_id: &str) -> Vec<LeaveRequest> {
        self.requests
            .iter()
            .rev()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect()
    }

    /// Number of requests still awaiting a decision.
    pub fn open_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Submitted)
            .count()
    }

    /// Total number of requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns true if no requests are recorded.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// Timesheets awaiting approval, in seeded order.
#[derive(Debug, Clone, Default)]
pub struct TimesheetLedger {
    timesheets: Vec<Timesheet>,
}

impl TimesheetLedger {
    /// Creates a ledger holding `timesheets`.
    pub fn new(timesheets: Vec<Timesheet>) -> Self {
        Self { timesheets }
    }

    /// Approves a pending timesheet.
    pub fn approve(&mut self, id: &str) -> EngineResult<Timesheet> {
        self.decide(id, TimesheetStatus::Approved)
    }

    /// Rejects a pending timesheet.
    pub fn reject(&mut self, id: &str) -> EngineResult<Timesheet> {
        self.decide(id, TimesheetStatus::Rejected)
    }

    fn decide(&mut self, id: &str, to: TimesheetStatus) -> EngineResult<Timesheet> {
        let timesheet = self
            .timesheets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| EngineError::TimesheetNotFound { id: id.to_string() })?;

        if timesheet.status.is_terminal() {
            return Err(EngineError::InvalidStatusTransition {
                id: id.to_string(),
                from: timesheet.status.to_string(),
                to: to.to_string(),
            });
        }

        timesheet.status = to;
        info!(timesheet_id = %id, status = %to, "Timesheet decided");
        Ok(timesheet.clone())
    }

    /// Looks up a timesheet by identifier.
    pub fn get(&self, id: &str) -> Option<&Timesheet> {
        self.timesheets.iter().find(|t| t.id == id)
    }

    /// All timesheets.
    pub fn timesheets(&self) -> &[Timesheet] {
        &self.timesheets
    }

    /// Number of timesheets still awaiting a decision.
    pub fn pending_count(&self) -> usize {
        self.timesheets
            .iter()
            .filter(|t| t.status == TimesheetStatus::Pending)
            .count()
    }
}
