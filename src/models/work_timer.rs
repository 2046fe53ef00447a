//! Work timer model.
//!
//! Tracks a single running entry against a project and task type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of work being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskType {
    /// Design work.
    Design,
    /// CAD drafting.
    #[serde(rename = "CAD")]
    Cad,
    /// Requests for information.
    #[serde(rename = "RFI")]
    Rfi,
    /// Reviews.
    Review,
    /// Administration.
    Admin,
}

/// A running timer entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEntry {
    /// When the entry started.
    pub started: DateTime<Utc>,
    /// The project the time is logged against.
    pub project_code: String,
    /// The kind of work.
    pub task: TaskType,
}

/// A work timer with at most one running entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTimer {
    active: Option<ActiveEntry>,
}

impl WorkTimer {
    /// Returns the running entry, if any.
    pub fn active(&self) -> Option<&ActiveEntry> {
        self.active.as_ref()
    }

    /// Starts timing. Does nothing if an entry is already running.
    pub fn start(
        &mut self,
        project_code: impl Into<String>,
        task: TaskType,
        instant: DateTime<Utc>,
    ) {
        if self.active.is_none() {
            self.active = Some(ActiveEntry {
                started: instant,
                project_code: project_code.into(),
                task,
            });
        }
    }

    /// Stops timing and returns the elapsed seconds, or `None` if idle.
    pub fn stop(&mut self, instant: DateTime<Utc>) -> Option<i64> {
        let entry = self.active.take()?;
        Some((instant - entry.started).num_seconds().max(0))
    }

    /// Seconds elapsed on the running entry; zero when idle.
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> i64 {
        self.active
            .as_ref()
            .map(|entry| (now - entry.started).num_seconds().max(0))
            .unwrap_or(0)
    }
}

/// Formats a second count as `HH:MM:SS`.
///
/// Hours are zero-padded to two digits and grow past 99 without truncation.
///
/// # Example
///
/// ```
/// use time_leave_engine::models::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "00:00:00");
/// assert_eq!(format_elapsed(3725), "01:02:05");
/// ```
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}
