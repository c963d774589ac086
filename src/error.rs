//! Error types and handling infrastructure for nycschools.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary wraps these in `anyhow` for top-level reporting.
//!
//! ## Design Principles
//!
//! - **One domain failure**: every way a fetch can go wrong is a `FetchError`
//! - **Context preservation**: the dataset and cause travel with the error for logging
//! - **Consistency**: Standardized Result type across all modules

use std::fmt;
use thiserror::Error;

/// Which open-data collection an operation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Schools,
    SatScores,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::Schools => f.write_str("school directory"),
            Dataset::SatScores => f.write_str("SAT results"),
        }
    }
}

/// The main error type for nycschools operations.
#[derive(Error, Debug)]
pub enum SchoolsError {
    /// A collection could not be retrieved: network failure, non-success status,
    /// or a body that is not a JSON array.
    #[error("Failed to fetch {dataset}: {message}")]
    FetchError { dataset: Dataset, message: String },

    /// Terminal I/O errors (raw mode, alternate screen, event polling)
    #[error("Terminal I/O failed: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for nycschools operations.
pub type Result<T> = std::result::Result<T, SchoolsError>;

impl SchoolsError {
    /// Create a FetchError for the given dataset
    pub fn fetch(dataset: Dataset, message: impl Into<String>) -> Self {
        Self::FetchError {
            dataset,
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// True for the fetch failures that surface as a user alert
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchError { .. })
    }
}

impl From<std::io::Error> for SchoolsError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
            std::io::ErrorKind::Interrupted => "Interrupted".to_string(),
            _ => "IO operation failed".to_string(),
        };
        Self::IoError {
            message,
            source: err,
        }
    }
}
