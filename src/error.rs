use crate::domain::stage::{Stage, WIP_LIMIT};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

/// Rejection reasons produced by the transition engine.
///
/// Every variant is recoverable: the board passed in is left untouched and the
/// message is meant to be shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Task text cannot be empty")]
    EmptyText,

    #[error("Column not found")]
    ColumnNotFound,

    #[error("Task not found")]
    TaskNotFound,

    #[error("Invalid target column")]
    InvalidTargetColumn,

    #[error("Tasks in {} cannot be moved", Stage::TERMINAL)]
    TerminalColumnImmutable,

    #[error("Tasks can only move to adjacent columns")]
    NonAdjacentMove,

    #[error("{} column can only contain {} tasks", Stage::WORK_IN_PROGRESS, WIP_LIMIT)]
    WipLimitExceeded,
}

/// Reason an untrusted value was refused as a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("Invalid board state: {0}")]
    InvalidState(#[from] ValidationError),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[cfg(feature = "sqlite-storage")]
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl BoardError {
    /// Returns the engine rejection, if this error is one
    pub fn as_transition(&self) -> Option<TransitionError> {
        match self {
            Self::Transition(err) => Some(*err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_messages() {
        assert_eq!(
            TransitionError::TerminalColumnImmutable.to_string(),
            "Tasks in DONE cannot be moved"
        );
        assert_eq!(
            TransitionError::WipLimitExceeded.to_string(),
            "DOING column can only contain 2 tasks"
        );
    }

    #[test]
    fn test_transition_converts_into_board_error() {
        let err: BoardError = TransitionError::NonAdjacentMove.into();
        assert_eq!(err.as_transition(), Some(TransitionError::NonAdjacentMove));
        assert_eq!(err.to_string(), "Tasks can only move to adjacent columns");
    }

    #[test]
    fn test_validation_error_reason() {
        let err: BoardError = ValidationError::new("Duplicate task id found").into();
        assert!(err.as_transition().is_none());
        assert_eq!(err.to_string(), "Invalid board state: Duplicate task id found");
    }
}
