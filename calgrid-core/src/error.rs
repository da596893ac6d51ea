//! Error types for the calgrid ecosystem.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in calgrid operations.
#[derive(Error, Debug)]
pub enum CalGridError {
    #[error("Invalid window: start {start} is after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    #[error("Invalid month index {0} (expected 0-11, where 0 is January)")]
    InvalidMonth(u32),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calgrid operations.
pub type CalGridResult<T> = Result<T, CalGridError>;
