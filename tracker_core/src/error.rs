//! Error types for the tracker_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tracker_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Record did not split into the expected number of comma-separated fields
    #[error("Invalid record format: expected {expected} fields, found {found}")]
    Format { expected: usize, found: usize },

    /// A record field could not be converted to its expected type
    #[error("Failed to parse {field} {value:?}: {reason}")]
    Parse {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A structurally valid value violates a domain constraint
    #[error("Validation error: {0}")]
    Validation(String),

    /// Activity kind literal is not one of the recognized labels
    #[error("Unknown activity kind: {0:?}")]
    UnknownActivity(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    pub(crate) fn parse(field: &'static str, value: &str, reason: impl ToString) -> Self {
        Error::Parse {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
