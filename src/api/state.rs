//! Application state for the Time & Leave Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::config::ConfigLoader;
use crate::ledger::{LeaveLedger, TimesheetLedger};
use crate::models::{ClockSession, ProjectCatalog, WorkTimer};

/// Shared application state.
///
/// The roster configuration is read-only. Ledgers, projects, clock sessions
/// and work timers are the mutable state and live behind async mutexes.
#[derive(Clone)]
pub struct AppState {
    /// The loaded roster configuration.
    config: Arc<ConfigLoader>,
    /// Source of the current instant.
    clock: Arc<dyn Clock>,
    /// Leave requests recorded this session.
    ledger: Arc<Mutex<LeaveLedger>>,
    /// Clock-in sessions keyed by employee id.
    sessions: Arc<Mutex<HashMap<String, ClockSession>>>,
    /// Work timers keyed by employee id.
    timers: Arc<Mutex<HashMap<String, WorkTimer>>>,
    /// Projects, seeded from the roster.
    projects: Arc<Mutex<ProjectCatalog>>,
    /// Timesheets awaiting approval.
    timesheets: Arc<Mutex<TimesheetLedger>>,
}

impl AppState {
    /// Creates a new application state reading the system clock.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new application state with an explicit clock.
    ///
    /// The leave ledger, project list and timesheet queue are seeded from
    /// configuration.
    pub fn with_clock(config: ConfigLoader, clock: Arc<dyn Clock>) -> Self {
        let ledger = LeaveLedger::with_history(config.config().leave().history.clone());
        let projects = ProjectCatalog::new(config.projects().to_vec());
        let timesheets = TimesheetLedger::new(config.timesheets().to_vec());
        Self {
            config: Arc::new(config),
            clock,
            ledger: Arc::new(Mutex::new(ledger)),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            timers: Arc::new(Mutex::new(HashMap::new())),
            projects: Arc::new(Mutex::new(projects)),
            timesheets: Arc::new(Mutex::new(timesheets)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Returns the leave ledger.
    pub fn ledger(&self) -> &Mutex<LeaveLedger> {
        &self.ledger
    }

    /// Returns the clock sessions.
    pub fn sessions(&self) -> &Mutex<HashMap<String, ClockSession>> {
        &self.sessions
    }

    /// Returns the work timers.
    pub fn timers(&self) -> &Mutex<HashMap<String, WorkTimer>> {
        &self.timers
    }

    /// Returns the project list.
    pub fn projects(&self) -> &Mutex<ProjectCatalog> {
        &self.projects
    }

    /// Returns the timesheet ledger.
    pub fn timesheets(&self) -> &Mutex<TimesheetLedger> {
        &self.timesheets
    }
}
