#![forbid(unsafe_code)]

//! Core domain model and report logic for the activity tracker.
//!
//! This crate provides:
//! - Domain types (records, biometrics, derived metrics)
//! - Compound duration parsing
//! - The calorie engine for full training records
//! - The daily step reporter
//! - Logging and configuration support for binaries

pub mod types;
pub mod error;
pub mod duration;
mod record;
pub mod spentcalories;
pub mod daysteps;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use duration::parse_duration;
pub use spentcalories::{
    running_spent_calories, spent_calories, training_info, training_report,
    walking_spent_calories,
};
pub use daysteps::{day_report, day_summary};
