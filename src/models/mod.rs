//! Core data models for the Time & Leave Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod clock_session;
mod employee;
mod holiday;
mod leave;
mod project;
mod timesheet;
mod work_timer;

pub use clock_session::{AttendanceStatus, BREAK_INCREMENT_MINUTES, ClockEvent, ClockSession};
pub use employee::{Employee, Role};
pub use holiday::{HolidayCalendar, PublicHoliday};
pub use leave::{LeaveRequest, LeaveStatus, LeaveSubmission, LeaveType};
pub use project::{Project, ProjectCatalog};
pub use timesheet::{Timesheet, TimesheetStatus};
pub use work_timer::{ActiveEntry, TaskType, WorkTimer, format_elapsed};
