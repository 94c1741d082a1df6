use crate::player::Player;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when editing a payoff table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// A new variable was given a name that is empty after trimming.
    #[error("please enter a variable name")]
    BlankVariableName,

    /// A column index does not address an existing variable.
    #[error("column {index} does not exist in the {player} table ({len} variables)")]
    ColumnOutOfRange {
        /// The table that was addressed.
        player: Player,
        /// The requested zero-based column.
        index: usize,
        /// Number of variables currently in the table.
        len: usize,
    },

    /// A case identifier could not be parsed.
    #[error("unknown case: \"{0}\" (expected case1 through case8)")]
    UnknownCase(String),

    /// A player identifier could not be parsed.
    #[error("unknown player: \"{0}\" (expected p1 or p2)")]
    UnknownPlayer(String),
}
