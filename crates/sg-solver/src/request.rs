//! The request payload and the rules for assembling it.

use serde::{Deserialize, Serialize};
use sg_core::{PayoffSnapshot, PayoffTable, Player};

use crate::error::{SolverError, SolverResult};

/// Both players' payoff data, keyed `p1` / `p2` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffData {
    /// Player 1's variables.
    pub p1: PayoffSnapshot,
    /// Player 2's variables.
    pub p2: PayoffSnapshot,
}

/// Everything the solver needs to describe one game.
///
/// Built once per submission; later edits to the tables do not touch a
/// payload that has already been built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload {
    /// Player 1's name.
    pub p1_name: String,
    /// Player 2's name.
    pub p2_name: String,
    /// Nature's two state names, as typed.
    pub nature_strategies: [String; 2],
    /// Player 1's strategies, blanks removed.
    pub p1_strategies: Vec<String>,
    /// Player 2's strategies, blanks removed.
    pub p2_strategies: Vec<String>,
    /// Payoff variables for both players.
    pub payoff_data: PayoffData,
    /// Player 1's payoff expression, passed through unparsed.
    pub p1_payoff_function: String,
    /// Player 2's payoff expression, passed through unparsed.
    pub p2_payoff_function: String,
}

impl RequestPayload {
    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SolverResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Split a comma-separated strategy field for the solver.
///
/// Unlike label derivation there is no positional fallback: entries are
/// trimmed and blanks are dropped, so `"a,,b,"` yields `["a", "b"]`.
pub fn strategy_list(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The form fields and tables a payload is read from.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    /// Player 1's name field.
    pub p1_name: &'a str,
    /// Player 2's name field.
    pub p2_name: &'a str,
    /// Nature's two state fields.
    pub nature: [&'a str; 2],
    /// Player 1's comma-separated strategy field.
    pub p1_strategies: &'a str,
    /// Player 2's comma-separated strategy field.
    pub p2_strategies: &'a str,
    /// Player 1's payoff function field.
    pub p1_function: &'a str,
    /// Player 2's payoff function field.
    pub p2_function: &'a str,
    /// Player 1's table.
    pub p1_table: &'a PayoffTable,
    /// Player 2's table.
    pub p2_table: &'a PayoffTable,
}

impl RequestBuilder<'_> {
    /// Assemble the payload.
    ///
    /// Fails only when a player has no variables; every other field is
    /// passed through for the solver to judge.
    pub fn build(&self) -> SolverResult<RequestPayload> {
        let p1 = self.p1_table.snapshot();
        let p2 = self.p2_table.snapshot();
        for (player, data) in [(Player::P1, &p1), (Player::P2, &p2)] {
            if data.is_empty() {
                log::debug!("refusing to build request: {player} table is empty");
                return Err(SolverError::EmptyPayoffTable(player));
            }
        }

        let payload = RequestPayload {
            p1_name: self.p1_name.to_string(),
            p2_name: self.p2_name.to_string(),
            nature_strategies: self.nature.map(str::to_string),
            p1_strategies: strategy_list(self.p1_strategies),
            p2_strategies: strategy_list(self.p2_strategies),
            payoff_data: PayoffData { p1, p2 },
            p1_payoff_function: self.p1_function.trim().to_string(),
            p2_payoff_function: self.p2_function.trim().to_string(),
        };
        log::debug!(
            "built request: {} p1 variables, {} p2 variables",
            payload.payoff_data.p1.len(),
            payload.payoff_data.p2.len()
        );
        Ok(payload)
    }
}
