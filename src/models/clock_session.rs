//! Clock-in session model.
//!
//! A [`ClockSession`] is one employee's check-in state for the day. The late
//! flag is captured at the moment of check-in and never re-evaluated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculation::is_late;
use crate::error::{EngineError, EngineResult};

use super::Employee;

/// Minutes added by a single break.
pub const BREAK_INCREMENT_MINUTES: u32 = 15;

/// Attendance status shown for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// No open check-in.
    NotCheckedIn,
    /// Checked in at or before the lateness threshold.
    OnTime,
    /// Checked in after the lateness threshold.
    Late,
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockEvent {
    /// The employee checked in.
    CheckedIn,
    /// The employee checked out.
    CheckedOut,
}

/// One employee's check-in state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSession {
    /// When the employee last checked in.
    pub time_in: Option<DateTime<Utc>>,
    /// When the employee last checked out.
    pub time_out: Option<DateTime<Utc>>,
    /// Whether the last check-in was late.
    pub late: bool,
    /// Break minutes taken.
    pub break_minutes: u32,
}

impl ClockSession {
    /// Returns true while a check-in is open.
    pub fn is_checked_in(&self) -> bool {
        self.time_in.is_some() && self.time_out.is_none()
    }

    /// Records a check-in at `instant`, evaluating lateness for `employee`.
    pub fn check_in(&mut self, employee: &Employee, instant: DateTime<Utc>) {
        self.time_in = Some(instant);
        self.time_out = None;
        self.late = is_late(employee, instant);
    }

    /// Records a check-out at `instant`.
    pub fn check_out(&mut self, employee_id: &str, instant: DateTime<Utc>) -> EngineResult<()> {
        if !self.is_checked_in() {
            return Err(EngineError::NotCheckedIn {
                employee_id: employee_id.to_string(),
            });
        }
        self.time_out = Some(instant);
        Ok(())
    }

    /// Checks in when not checked in, otherwise checks out through
    /// [`ClockSession::check_out`].
    ///
    /// # Example
    ///
    /// ```
    /// use time_leave_engine::models::{ClockEvent, ClockSession, Employee, Role};
    /// use chrono::{NaiveTime, TimeZone, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "E1001".to_string(),
    ///     name: "Rizwan".to_string(),
    ///     role: Role::Engineer,
    ///     country: "AU".to_string(),
    ///     timezone: chrono_tz::UTC,
    ///     shift_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     shift_end: NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
    ///     grace_minutes: 5,
    ///     hourly_rate: Decimal::new(55, 0),
    ///     manager: None,
    /// };
    ///
    /// let mut session = ClockSession::default();
    /// let morning = Utc.with_ymd_and_hms(2025, 8, 25, 8, 5, 0).unwrap();
    /// assert_eq!(session.toggle(&employee, morning)?, ClockEvent::CheckedIn);
    /// assert!(!session.late);
    ///
    /// let evening = Utc.with_ymd_and_hms(2025, 8, 25, 16, 30, 0).unwrap();
    /// assert_eq!(session.toggle(&employee, evening)?, ClockEvent::CheckedOut);
    /// # Ok::<(), time_leave_engine::error::EngineError>(())
    /// ```
    pub fn toggle(
        &mut self,
        employee: &Employee,
        instant: DateTime<Utc>,
    ) -> EngineResult<ClockEvent> {
        if self.is_checked_in() {
            self.check_out(&employee.id, instant)?;
            Ok(ClockEvent::CheckedOut)
        } else {
            self.check_in(employee, instant);
            Ok(ClockEvent::CheckedIn)
        }
    }

    /// Adds one break increment.
    pub fn take_break(&mut self) {
        self.break_minutes += BREAK_INCREMENT_MINUTES;
    }

    /// Returns the status to display for this session.
    pub fn status(&self) -> AttendanceStatus {
        match (self.is_checked_in(), self.late) {
            (false, _) => AttendanceStatus::NotCheckedIn,
            (true, false) => AttendanceStatus::OnTime,
            (true, true) => AttendanceStatus::Late,
        }
    }
}
