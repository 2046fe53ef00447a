//! Public holiday models.
//!
//! This module contains the [`PublicHoliday`] and [`HolidayCalendar`] types.
//! A calendar is only ever supplied by configuration; an empty calendar means
//! leave is counted in plain calendar days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a public holiday.
///
/// # Example
///
/// ```
/// use time_leave_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
///     name: "Christmas Day".to_string(),
///     region: "national".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Christmas Day").
    pub name: String,
    /// The region where this holiday applies (e.g., "national", "VIC").
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    "national".to_string()
}

/// A set of public holidays excluded from leave day counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// Holidays in the calendar.
    #[serde(default)]
    pub public_holidays: Vec<PublicHoliday>,
}

impl HolidayCalendar {
    /// Creates a calendar from a list of holidays.
    pub fn new(public_holidays: Vec<PublicHoliday>) -> Self {
        Self { public_holidays }
    }

    /// Returns true if no holidays are configured.
    pub fn is_empty(&self) -> bool {
        self.public_holidays.is_empty()
    }

    /// Checks if a given date is a public holiday.
    ///
    /// # Example
    ///
    /// ```
    /// use time_leave_engine::models::{HolidayCalendar, PublicHoliday};
    /// use chrono::NaiveDate;
    ///
    /// let calendar = HolidayCalendar::new(vec![PublicHoliday {
    ///     date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
    ///     name: "Christmas Day".to_string(),
    ///     region: "national".to_string(),
    /// }]);
    ///
    /// assert!(calendar.is_public_holiday(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()));
    /// assert!(!calendar.is_public_holiday(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap()));
    /// ```
    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.public_holidays.iter().any(|h| h.date == date)
    }

    /// Counts distinct holidays falling within `start..=end`.
    pub fn count_between(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        let mut dates: Vec<NaiveDate> = self
            .public_holidays
            .iter()
            .map(|h| h.date)
            .filter(|d| *d >= start && *d <= end)
            .collect();
        dates.sort();
        dates.dedup();
        dates.len() as u32
    }
}
