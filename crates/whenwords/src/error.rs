//! Error types for whenwords operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WhenwordsError {
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    #[error("Negative durations not allowed")]
    NegativeDuration,

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Empty string")]
    EmptyInput,

    #[error("No parseable units found in '{0}'")]
    NoUnitsFound(String),
}

pub type Result<T> = std::result::Result<T, WhenwordsError>;
