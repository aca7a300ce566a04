//! Error types for slotwise-core operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid interval: start {start} is not before end {end}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid timezone: {0}")]
    UnknownTimeZone(String),

    #[error("Local time {0} does not exist in timezone {1} (DST gap)")]
    NonexistentLocalTime(String, String),

    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
