//! Error types for the editing session.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while processing a session command.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A known command was given malformed arguments.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// The first word is not a command.
    #[error("unknown command: {0} (type 'help' for commands)")]
    UnknownCommand(String),

    /// No built-in preset has this identifier.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// A table edit was rejected.
    #[error("{0}")]
    Core(#[from] sg_core::CoreError),

    /// A request could not be built.
    #[error("{0}")]
    Solver(#[from] sg_solver::SolverError),
}
