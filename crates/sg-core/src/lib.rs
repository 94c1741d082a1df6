//! Core types for two-player signaling games with a move by Nature.
//!
//! This crate owns the editable game description: the fixed catalog of
//! eight outcome cases, the free-text strategy names that label them, and
//! one payoff table per player. It knows nothing about the solver; the
//! `sg-solver` crate turns these types into a request payload.

/// The fixed catalog of outcome cases and their factor mapping.
pub mod case;
/// Error types used throughout the crate.
pub mod error;
/// Display labels derived from strategy names.
pub mod label;
/// Strategy-name fields and their positional fallbacks.
pub mod names;
/// Player identifiers.
pub mod player;
/// Built-in example games.
pub mod preset;
/// Per-player payoff tables with positional variable columns.
pub mod table;

/// Re-export case catalog types.
pub use case::{CASE_COUNT, CaseId, Factors, Slot};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export label types.
pub use label::{CaseLabels, derive_label};
/// Re-export strategy-name types.
pub use names::StrategyNames;
/// Re-export player identifiers.
pub use player::Player;
/// Re-export the preset description.
pub use preset::GamePreset;
/// Re-export payoff table types.
pub use table::{PayoffSnapshot, PayoffTable, Variable, parse_cell};
