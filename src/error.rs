//! Error types for the command interpreter.

use thiserror::Error;

/// A rejected command line.
///
/// Every variant is recoverable: the interpreter renders it as a single error
/// line and moves on to the next command. The `Display` text is the detail
/// that follows the error prefix.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("неизвестная команда: {0}")]
    UnknownCommand(String),

    #[error("команда {verb} ожидает аргументов: {expected}, получено: {actual}")]
    ArityMismatch {
        verb: String,
        expected: usize,
        actual: usize,
    },

    #[error("команда {verb} ожидает число, получено: {value}")]
    InvalidArgument { verb: String, value: String },

    #[error("неизвестный режим очистки: {0}")]
    InvalidMode(String),
}

/// Failures of the collaborators around the interpreter core.
#[derive(Error, Debug)]
pub enum RobotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for driver-level operations.
pub type RobotResult<T> = Result<T, RobotError>;
