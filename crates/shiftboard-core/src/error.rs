//! Error types for the shift tracking library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Action, TaskId, TaskState};

/// Error type for all tracker operations.
///
/// Transition operations only ever produce [`TrackerError::TaskNotFound`] and
/// [`TrackerError::InvalidTransition`]. The remaining variants come from
/// building a tracker out of seed data.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// No task matches the given identifier
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: TaskId },
    /// The requested action is not legal in the task's current state
    #[error("Cannot {action} on task {id}: task is {state}")]
    InvalidTransition {
        id: TaskId,
        state: TaskState,
        action: Action,
    },
    /// Seed data violates a task list constraint
    #[error("Invalid seed data: {reason}")]
    InvalidSeed { reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl TrackerError {
    /// Creates an invalid seed error with the given reason.
    pub fn invalid_seed(reason: impl Into<String>) -> Self {
        Self::InvalidSeed {
            reason: reason.into(),
        }
    }

    /// Returns true for the recoverable errors a caller can report and move
    /// past, i.e. an unknown task or an illegal transition.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound { .. } | Self::InvalidTransition { .. }
        )
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
