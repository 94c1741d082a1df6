//! Editing session for a signaling game.
//!
//! [`GameSession`] owns the form fields, the shared case labels, both
//! payoff tables, and the last rendered solver result. It interprets line
//! commands and hands finished payloads back to the caller, which is
//! responsible for talking to the solver.

pub mod board;
pub mod error;
pub mod fields;
pub mod session;
pub mod view;

pub use board::ResultBoard;
pub use error::{SessionError, SessionResult};
pub use fields::SessionFields;
pub use session::{GameSession, Reply};
