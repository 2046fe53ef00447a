//! Configuration types for the roster and leave settings.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Employee, HolidayCalendar, LeaveRequest, Project, Timesheet};

/// Organisation metadata from `organisation.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganisationMetadata {
    /// Organisation name.
    pub name: String,
    /// Short description of the data set.
    #[serde(default)]
    pub description: String,
}

/// Roster file structure (`roster.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Employees, in display order.
    pub employees: Vec<Employee>,
    /// Projects time can be logged against.
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Leave file structure (`leave.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveConfig {
    /// Balance for employees without an explicit entry.
    pub default_balance: Decimal,
    /// Per-employee balances in days.
    #[serde(default)]
    pub balances: HashMap<String, Decimal>,
    /// Requests recorded before the session started.
    #[serde(default)]
    pub history: Vec<LeaveRequest>,
}

/// Timesheet file structure (`timesheets.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimesheetConfig {
    /// Timesheets submitted for approval.
    #[serde(default)]
    pub timesheets: Vec<Timesheet>,
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Organisation metadata.
    metadata: OrganisationMetadata,
    /// Roster and projects.
    roster: RosterConfig,
    /// Leave balances and history.
    leave: LeaveConfig,
    /// Public holidays; empty when no calendar is configured.
    holidays: HolidayCalendar,
    /// Timesheets awaiting approval; empty when none are configured.
    timesheets: TimesheetConfig,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    pub fn new(
        metadata: OrganisationMetadata,
        roster: RosterConfig,
        leave: LeaveConfig,
        holidays: HolidayCalendar,
        timesheets: TimesheetConfig,
    ) -> Self {
        Self {
            metadata,
            roster,
            leave,
            holidays,
            timesheets,
        }
    }

    /// Returns the organisation metadata.
    pub fn organisation(&self) -> &OrganisationMetadata {
        &self.metadata
    }

    /// Returns all employees.
    pub fn employees(&self) -> &[Employee] {
        &self.roster.employees
    }

    /// Returns all projects.
    pub fn projects(&self) -> &[Project] {
        &self.roster.projects
    }

    /// Returns the leave configuration.
    pub fn leave(&self) -> &LeaveConfig {
        &self.leave
    }

    /// Returns the holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Returns the configured timesheets.
    pub fn timesheets(&self) -> &[Timesheet] {
        &self.timesheets.timesheets
    }
}
