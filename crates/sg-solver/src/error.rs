//! Error types for request construction and solver transport.

use sg_core::Player;
use thiserror::Error;

/// Result type for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;

/// Errors raised while building a request or talking to the solver.
///
/// A solver that answers with a non-success status is not an error here;
/// that is an ordinary [`SolverOutcome::Rejected`](crate::SolverOutcome::Rejected).
#[derive(Debug, Error)]
pub enum SolverError {
    /// A player's table has no variables, so there is nothing to solve.
    #[error(
        "please add at least one payoff variable for each player before calculating ({0} has none)"
    )]
    EmptyPayoffTable(Player),

    /// The configured solver address is not a valid URL.
    #[error("invalid solver url: {0}")]
    InvalidUrl(String),

    /// The request could not be sent or the response body could not be read.
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape the solver documents.
    #[error("could not decode solver response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response parsed but is missing a field its status requires.
    #[error("malformed solver response: {0}")]
    MalformedResponse(String),
}

impl SolverError {
    /// True for failures of the exchange itself rather than of user input.
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::EmptyPayoffTable(_))
    }
}
