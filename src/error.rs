//! Error types for the Time & Leave Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while evaluating attendance or
//! recording leave.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Time & Leave Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use time_leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee with the given identifier exists in the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee identifier that was not found.
        id: String,
    },

    /// A leave submission lacked a start or end date.
    #[error("Leave request needs both a start and an end date")]
    MissingDateRange,

    /// A date string could not be parsed as a civil date.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// The requested days exceed the balance and no cash-out was requested.
    #[error("Insufficient balance: requested {requested} days, {balance} available")]
    InsufficientBalance {
        /// Days requested.
        requested: u32,
        /// Days available.
        balance: Decimal,
    },

    /// No leave request with the given identifier exists.
    #[error("Leave request not found: {id}")]
    LeaveRequestNotFound {
        /// The request identifier that was not found.
        id: String,
    },

    /// A leave request or timesheet was asked to move out of a terminal
    /// status.
    #[error("Request '{id}' cannot move from {from} to {to}")]
    InvalidStatusTransition {
        /// The leave request or timesheet identifier.
        id: String,
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },

    /// No timesheet with the given identifier exists.
    #[error("Timesheet not found: {id}")]
    TimesheetNotFound {
        /// The timesheet identifier that was not found.
        id: String,
    },

    /// No project with the given code exists.
    #[error("Project not found: {code}")]
    ProjectNotFound {
        /// The project code that was not found.
        code: String,
    },

    /// A new project was submitted without a code.
    #[error("Project code is required")]
    MissingProjectCode,

    /// A new project reused the code of an existing one.
    #[error("Project '{code}' already exists")]
    DuplicateProject {
        /// The conflicting project code.
        code: String,
    },

    /// A check-out was attempted without an open check-in.
    #[error("Employee '{employee_id}' is not checked in")]
    NotCheckedIn {
        /// The employee identifier.
        employee_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
