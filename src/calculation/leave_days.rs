//! Leave day counting and balance validation.
//!
//! Leave is counted in inclusive civil days. A holiday calendar, when one is
//! configured, removes public holidays from the count; without one the count
//! is plain calendar-day subtraction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, LeaveSubmission};

/// Format of civil dates on the wire and in forms.
pub const CIVIL_DATE_FORMAT: &str = "%Y-%m-%d";

/// The validated shape of a leave submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveAssessment {
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave.
    pub end_date: NaiveDate,
    /// Days counted for the range.
    pub days: u32,
    /// True when the request was only accepted because of cash-out.
    pub exceeds_balance: bool,
}

/// Counts leave days from `start` to `end`, both inclusive.
///
/// Returns 0 when `end` precedes `start`.
///
/// # Example
///
/// ```
/// use time_leave_engine::calculation::count_leave_days;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 8, 29).unwrap();
/// assert_eq!(count_leave_days(start, end), 5);
/// assert_eq!(count_leave_days(end, start), 0);
/// ```
pub fn count_leave_days(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    ((end - start).num_days() + 1) as u32
}

/// Counts leave days from `start` to `end`, skipping holidays in `calendar`.
pub fn count_leave_days_excluding(
    start: NaiveDate,
    end: NaiveDate,
    calendar: &HolidayCalendar,
) -> u32 {
    let days = count_leave_days(start, end);
    if days == 0 {
        return 0;
    }
    days - calendar.count_between(start, end)
}

/// Parses a date form field.
///
/// An empty (or blank) field is `Ok(None)`.
pub fn parse_form_date(value: &str) -> EngineResult<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, CIVIL_DATE_FORMAT)
        .map(Some)
        .map_err(|_| EngineError::InvalidDate {
            value: value.to_string(),
        })
}

/// Checks `days` against `balance`.
///
/// Fails with [`EngineError::InsufficientBalance`] when `days` exceeds the
/// balance and `cashout` is not set. Cash-out accepts any length.
pub fn validate_against_balance(days: u32, balance: Decimal, cashout: bool) -> EngineResult<()> {
    if Decimal::from(days) > balance && !cashout {
        return Err(EngineError::InsufficientBalance {
            requested: days,
            balance,
        });
    }
    Ok(())
}

/// Validates a leave submission and counts its days.
///
/// # Errors
///
/// - [`EngineError::MissingDateRange`] when either date is absent
/// - [`EngineError::InsufficientBalance`] when the days exceed the balance
///   without cash-out
///
/// # Example
///
/// ```
/// use time_leave_engine::calculation::assess_leave;
/// use time_leave_engine::models::{HolidayCalendar, LeaveSubmission, LeaveType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let submission = LeaveSubmission {
///     leave_type: LeaveType::Annual,
///     start_date: NaiveDate::from_ymd_opt(2025, 8, 25),
///     end_date: NaiveDate::from_ymd_opt(2025, 8, 29),
///     cashout: false,
/// };
///
/// let assessment = assess_leave(&submission, Decimal::new(12, 0), &HolidayCalendar::default())?;
/// assert_eq!(assessment.days, 5);
/// # Ok::<(), time_leave_engine::error::EngineError>(())
/// ```
pub fn assess_leave(
    submission: &LeaveSubmission,
    balance: Decimal,
    calendar: &HolidayCalendar,
) -> EngineResult<LeaveAssessment> {
    let (start_date, end_date) = match (submission.start_date, submission.end_date) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err(EngineError::MissingDateRange),
    };

    let days = count_leave_days_excluding(start_date, end_date, calendar);
    validate_against_balance(days, balance, submission.cashout)?;

    Ok(LeaveAssessment {
        start_date,
        end_date,
        days,
        exceeds_balance: Decimal::from(days) > balance,
    })
}
