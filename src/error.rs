use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::events::EventViolation;

#[derive(Error, Debug)]
pub enum DoraError {
    #[error("Invalid report window: start {start} is after end {end}")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid deployment event {commit_id}: {violation}")]
    InvalidEvent {
        commit_id: String,
        violation: EventViolation,
    },

    #[error("Duplicate commit id in event data: {0}")]
    DuplicateCommit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DoraError>;
