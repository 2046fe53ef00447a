//! Attendance (lateness) evaluation.
//!
//! A check-in is late when the employee's local wall-clock minute of day is
//! strictly greater than `shift_start + grace_minutes`. The comparison is done
//! in plain minute arithmetic: a threshold past 23:59 simply can never be
//! exceeded on that day, it does not wrap into the next morning.

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Format of the local clock string.
pub const LOCAL_CLOCK_FORMAT: &str = "%H:%M:%S";

/// The outcome of evaluating one instant against an employee's shift.
///
/// # Example
///
/// ```
/// use time_leave_engine::calculation::AttendanceCheck;
/// use chrono::{TimeZone, Utc};
///
/// let check = AttendanceCheck {
///     employee_id: "E1001".to_string(),
///     instant: Utc.with_ymd_and_hms(2025, 8, 24, 22, 6, 0).unwrap(),
///     local_time: "08:06:00".to_string(),
///     minutes_since_midnight: 486,
///     threshold_minutes: 485,
///     late: true,
/// };
/// assert!(check.late);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCheck {
    /// The employee evaluated.
    pub employee_id: String,
    /// The instant evaluated.
    pub instant: DateTime<Utc>,
    /// The instant on the employee's local clock (`HH:MM:SS`).
    pub local_time: String,
    /// Local wall-clock minute of day, 0 to 1439.
    pub minutes_since_midnight: u32,
    /// Shift start plus grace, in minutes after local midnight. May exceed 1439.
    pub threshold_minutes: u32,
    /// Whether the instant counts as late.
    pub late: bool,
}

/// Returns the local wall-clock minute of day of `instant` in `timezone`.
///
/// The result is always in `0..=1439` and does not depend on the host's
/// timezone.
///
/// # Example
///
/// ```
/// use time_leave_engine::calculation::minutes_since_local_midnight;
/// use chrono::{TimeZone, Utc};
///
/// // 22:30 UTC on 24 Aug is 08:30 the next morning in Melbourne (UTC+10)
/// let instant = Utc.with_ymd_and_hms(2025, 8, 24, 22, 30, 0).unwrap();
/// assert_eq!(minutes_since_local_midnight(instant, chrono_tz::Australia::Melbourne), 510);
/// ```
pub fn minutes_since_local_midnight(instant: DateTime<Utc>, timezone: Tz) -> u32 {
    let local = instant.with_timezone(&timezone);
    local.hour() * 60 + local.minute()
}

/// Returns `shift_start + grace_minutes` as minutes after midnight.
///
/// No wraparound is applied. A grace large enough to overflow saturates at
/// `u32::MAX`, which no minute of the day can exceed.
pub fn lateness_threshold(shift_start: NaiveTime, grace_minutes: u32) -> u32 {
    (shift_start.hour() * 60 + shift_start.minute()).saturating_add(grace_minutes)
}

/// Formats `instant` on the local clock of `timezone`.
pub fn local_clock(instant: DateTime<Utc>, timezone: Tz) -> String {
    instant
        .with_timezone(&timezone)
        .format(LOCAL_CLOCK_FORMAT)
        .to_string()
}

/// Decides lateness from raw shift configuration.
///
/// An instant exactly on the threshold minute is on time.
pub fn is_late_at(
    shift_start: NaiveTime,
    grace_minutes: u32,
    timezone: Tz,
    instant: DateTime<Utc>,
) -> bool {
    minutes_since_local_midnight(instant, timezone) > lateness_threshold(shift_start, grace_minutes)
}

/// Decides lateness for `employee` at `instant`.
pub fn is_late(employee: &Employee, instant: DateTime<Utc>) -> bool {
    is_late_at(
        employee.shift_start,
        employee.grace_minutes,
        employee.timezone,
        instant,
    )
}

/// Evaluates `instant` against `employee`'s shift.
///
/// The late flag and the local clock string are derived independently from
/// the same inputs; evaluating the same instant twice gives the same result.
///
/// # Example
///
/// ```
/// use time_leave_engine::calculation::evaluate_attendance;
/// use time_leave_engine::models::{Employee, Role};
/// use chrono::{NaiveTime, TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "E1001".to_string(),
///     name: "Rizwan".to_string(),
///     role: Role::Engineer,
///     country: "AU".to_string(),
///     timezone: chrono_tz::Australia::Melbourne,
///     shift_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     shift_end: NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
///     grace_minutes: 5,
///     hourly_rate: Decimal::new(55, 0),
///     manager: None,
/// };
///
/// // 08:05 in Melbourne: exactly on the threshold
/// let instant = Utc.with_ymd_and_hms(2025, 8, 24, 22, 5, 0).unwrap();
/// let check = evaluate_attendance(&employee, instant);
/// assert!(!check.late);
/// assert_eq!(check.local_time, "08:05:00");
/// ```
pub fn evaluate_attendance(employee: &Employee, instant: DateTime<Utc>) -> AttendanceCheck {
    let minutes_since_midnight = minutes_since_local_midnight(instant, employee.timezone);
    let threshold_minutes = lateness_threshold(employee.shift_start, employee.grace_minutes);

    AttendanceCheck {
        employee_id: employee.id.clone(),
        instant,
        local_time: local_clock(instant, employee.timezone),
        minutes_since_midnight,
        threshold_minutes,
        late: minutes_since_midnight > threshold_minutes,
    }
}
