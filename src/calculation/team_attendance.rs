//! Team attendance summary for the manager dashboard.
//!
//! Every entry is derived from the employee's recorded clock session, so the
//! summary is fully deterministic for a given roster, set of sessions and
//! instant.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceStatus, ClockSession, Employee};

use super::attendance::local_clock;

/// One employee's line on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAttendanceEntry {
    /// The employee.
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// Current status.
    pub status: AttendanceStatus,
    /// Whether the employee's latest check-in was late, even if since checked out.
    pub arrived_late: bool,
    /// The employee's local clock at the summary instant.
    pub local_time: String,
    /// Local clock time of the latest check-in.
    pub checked_in_at: Option<String>,
}

/// Dashboard totals plus per-employee entries, in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAttendanceSummary {
    /// Per-employee entries.
    pub entries: Vec<TeamAttendanceEntry>,
    /// Employees currently checked in on time.
    pub on_time: u32,
    /// Employees whose latest check-in was late.
    pub late_arrivals: u32,
    /// Employees without an open check-in.
    pub not_checked_in: u32,
}

/// Builds the team summary at instant `now`.
///
/// Employees with no session are reported as not checked in.
pub fn summarize_team(
    employees: &[Employee],
    sessions: &HashMap<String, ClockSession>,
    now: DateTime<Utc>,
) -> TeamAttendanceSummary {
    let idle = ClockSession::default();
    let mut summary = TeamAttendanceSummary {
        entries: Vec::with_capacity(employees.len()),
        on_time: 0,
        late_arrivals: 0,
        not_checked_in: 0,
    };

    for employee in employees {
        let session = sessions.get(&employee.id).unwrap_or(&idle);
        let status = session.status();
        let arrived_late = session.time_in.is_some() && session.late;

        match status {
            AttendanceStatus::OnTime => summary.on_time += 1,
            AttendanceStatus::NotCheckedIn => summary.not_checked_in += 1,
            AttendanceStatus::Late => {}
        }
        if arrived_late {
            summary.late_arrivals += 1;
        }

        summary.entries.push(TeamAttendanceEntry {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            status,
            arrived_late,
            local_time: local_clock(now, employee.timezone),
            checked_in_at: session
                .time_in
                .map(|instant| local_clock(instant, employee.timezone)),
        });
    }

    summary
}
