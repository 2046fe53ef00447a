//! Calculation logic for the Time & Leave Engine.
//!
//! This module contains the pure rules of the engine: lateness evaluation
//! against an employee's local shift start, inclusive leave-day counting with
//! balance validation, and the deterministic team attendance summary.

mod attendance;
mod leave_days;
mod team_attendance;

pub use attendance::{
    AttendanceCheck, LOCAL_CLOCK_FORMAT, evaluate_attendance, is_late, is_late_at,
    lateness_threshold, local_clock, minutes_since_local_midnight,
};
pub use leave_days::{
    CIVIL_DATE_FORMAT, LeaveAssessment, assess_leave, count_leave_days,
    count_leave_days_excluding, parse_form_date, validate_against_balance,
};
pub use team_attendance::{TeamAttendanceEntry, TeamAttendanceSummary, summarize_team};
