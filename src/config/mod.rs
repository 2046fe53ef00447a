//! Configuration loading and management for the Time & Leave Engine.
//!
//! This module loads the roster (employees and projects), leave balances, an
//! optional public holiday calendar and optional timesheets from YAML files.
//! Seed data is passed around as explicit configuration rather than global
//! state, so tests can supply isolated fixtures.
//!
//! # Example
//!
//! ```no_run
//! use time_leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample").unwrap();
//! println!("Loaded roster for: {}", config.organisation().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LeaveConfig, OrganisationMetadata, RosterConfig, TimesheetConfig};
