//! Employee model and related types.
//!
//! This module defines the Employee struct and Role enum for the roster
//! records that attendance is evaluated against.

use chrono::NaiveTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The role an employee holds in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Approves leave and reviews team attendance.
    Manager,
    /// Engineering staff.
    Engineer,
    /// Drafting staff.
    Drafter,
}

/// Represents an employee on the roster.
///
/// Shift start and end are wall-clock times in the employee's own timezone,
/// never UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee (e.g., "E1001").
    pub id: String,
    /// Display name.
    pub name: String,
    /// The employee's role.
    pub role: Role,
    /// ISO country code (e.g., "AU").
    pub country: String,
    /// IANA timezone the shift times are expressed in.
    pub timezone: Tz,
    /// Scheduled local start of the working day, written "HH:MM".
    #[serde(with = "shift_time")]
    pub shift_start: NaiveTime,
    /// Scheduled local end of the working day, written "HH:MM".
    #[serde(with = "shift_time")]
    pub shift_end: NaiveTime,
    /// Minutes of leeway after shift start before a check-in is late.
    #[serde(default)]
    pub grace_minutes: u32,
    /// Hourly rate.
    pub hourly_rate: Decimal,
    /// Name of the employee's manager, if any.
    #[serde(default)]
    pub manager: Option<String>,
}

impl Employee {
    /// Returns true if the employee is a manager.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_leave_engine::models::{Employee, Role};
    /// use chrono::NaiveTime;
    /// use rust_decimal::Decimal;
    ///
    /// let nick = Employee {
    ///     id: "E1000".to_string(),
    ///     name: "Nick".to_string(),
    ///     role: Role::Manager,
    ///     country: "AU".to_string(),
    ///     timezone: chrono_tz::Australia::Melbourne,
    ///     shift_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     shift_end: NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
    ///     grace_minutes: 5,
    ///     hourly_rate: Decimal::new(80, 0),
    ///     manager: None,
    /// };
    /// assert!(nick.is_manager());
    /// ```
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}

/// Serde adapter for "HH:MM" shift times.
mod shift_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(|e| {
            serde::de::Error::custom(format!("invalid shift time '{}': {}", raw, e))
        })
    }
}
