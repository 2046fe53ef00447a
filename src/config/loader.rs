//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the roster and
//! leave settings from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, HolidayCalendar, Project, Timesheet};

use super::types::{AppConfig, LeaveConfig, OrganisationMetadata, RosterConfig, TimesheetConfig};

/// Loads and provides access to roster configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides lookups for employees, leave balances and holidays.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── organisation.yaml  # Organisation metadata
/// ├── roster.yaml        # Employees and projects
/// ├── leave.yaml         # Leave balances and request history
/// ├── holidays.yaml      # Optional public holiday calendar
/// └── timesheets.yaml    # Optional timesheets awaiting approval
/// ```
///
/// # Example
///
/// ```no_run
/// use time_leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample").unwrap();
///
/// let employee = loader.get_employee("E1001").unwrap();
/// println!("{} starts at {}", employee.name, employee.shift_start);
/// println!("Balance: {} days", loader.leave_balance("E1001"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML, an unknown timezone or a shift time
    ///   not written "HH:MM"
    ///
    /// A missing `holidays.yaml` is not an error; leave is then counted in
    /// plain calendar days. A missing `timesheets.yaml` leaves the approval
    /// queue empty.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<OrganisationMetadata>(&path.join("organisation.yaml"))?;
        let roster = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;
        let leave = Self::load_yaml::<LeaveConfig>(&path.join("leave.yaml"))?;

        let holidays = Self::load_optional_yaml::<HolidayCalendar>(&path.join("holidays.yaml"))?;
        let timesheets =
            Self::load_optional_yaml::<TimesheetConfig>(&path.join("timesheets.yaml"))?;

        debug!(
            path = %path.display(),
            employees = roster.employees.len(),
            projects = roster.projects.len(),
            holidays = holidays.public_holidays.len(),
            timesheets = timesheets.timesheets.len(),
            "Loaded configuration"
        );

        Ok(Self {
            config: AppConfig::new(metadata, roster, leave, holidays, timesheets),
        })
    }

    /// Builds a loader from already-constructed configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads a YAML file that may be absent, falling back to `T::default()`.
    fn load_optional_yaml<T>(path: &Path) -> EngineResult<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        if path.exists() {
            Self::load_yaml(path)
        } else {
            Ok(T::default())
        }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the organisation metadata.
    pub fn organisation(&self) -> &OrganisationMetadata {
        self.config.organisation()
    }

    /// Returns every employee in roster order.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Returns every project.
    pub fn projects(&self) -> &[Project] {
        self.config.projects()
    }

    /// Returns the holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        self.config.holidays()
    }

    /// Returns the configured timesheets.
    pub fn timesheets(&self) -> &[Timesheet] {
        self.config.timesheets()
    }

    /// Gets an employee by identifier.
    ///
    /// # Returns
    ///
    /// Returns the employee if found, or `EmployeeNotFound`.
    pub fn get_employee(&self, id: &str) -> EngineResult<&Employee> {
        self.config
            .employees()
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Gets the leave balance for an employee, falling back to the default.
    pub fn leave_balance(&self, employee_id: &str) -> Decimal {
        let leave = self.config.leave();
        leave
            .balances
            .get(employee_id)
            .copied()
            .unwrap_or(leave.default_balance)
    }
}
