//! Time & Leave Engine
//!
//! This crate provides the attendance and leave rules behind a time-and-leave
//! tracking UI: lateness determination against an employee's local shift start,
//! inclusive leave-day counting with balance validation, and the clock-in,
//! work timer and team attendance state the UI shell drives.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
