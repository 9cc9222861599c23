//! Crate error type.
//!
//! Board commands and configuration loading report failures through
//! [`ScheduleError`]; validation problems are carried inside it.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by board commands and configuration loading.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Input failed boundary validation; nothing was changed.
    #[error("invalid input: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),

    /// No task with this ID is on the board.
    #[error("unknown task: {0}")]
    UnknownTask(String),

    /// A drag command arrived with no drag in progress.
    #[error("no drag in progress")]
    NoActiveDrag,

    /// A drag is already in progress for this task.
    #[error("drag already in progress for task {0}")]
    DragInProgress(String),

    /// Configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::Invalid(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for board and configuration operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
