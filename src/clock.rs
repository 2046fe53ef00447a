//! Sources of the current instant.
//!
//! Attendance rules never read the system clock directly; the caller hands
//! them an instant. The shell obtains that instant through a [`Clock`], which
//! lets tests freeze time.

use chrono::{DateTime, Utc};

/// Supplies the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
///
/// # Example
///
/// ```
/// use time_leave_engine::clock::{Clock, FixedClock};
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2025, 8, 25, 22, 0, 0).unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(clock.now(), instant);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
