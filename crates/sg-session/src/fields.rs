//! The free-text fields of a game description.

use sg_core::names::DEFAULT_ACTIONS;
use sg_core::{Player, StrategyNames};

/// Everything the user types besides table cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFields {
    /// Player 1's name.
    pub p1_name: String,
    /// Player 2's name.
    pub p2_name: String,
    /// Nature's two state names.
    pub nature: [String; 2],
    /// Player 1's comma-separated strategies.
    pub p1_strategies: String,
    /// Player 2's comma-separated strategies.
    pub p2_strategies: String,
    /// Player 1's payoff expression; empty means "sum of all variables".
    pub p1_function: String,
    /// Player 2's payoff expression.
    pub p2_function: String,
}

impl Default for SessionFields {
    fn default() -> Self {
        let actions = DEFAULT_ACTIONS.join(", ");
        Self {
            p1_name: "Player 1".to_string(),
            p2_name: "Player 2".to_string(),
            nature: ["stable".to_string(), "unstable".to_string()],
            p1_strategies: actions.clone(),
            p2_strategies: actions,
            p1_function: String::new(),
            p2_function: String::new(),
        }
    }
}

impl SessionFields {
    /// The names currently feeding the case labels.
    pub fn strategy_names(&self) -> StrategyNames {
        StrategyNames::from_fields(
            &self.nature[0],
            &self.nature[1],
            &self.p1_strategies,
            &self.p2_strategies,
        )
    }

    /// A player's name field.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::P1 => &self.p1_name,
            Player::P2 => &self.p2_name,
        }
    }

    /// A player's strategy field.
    pub fn strategies(&self, player: Player) -> &str {
        match player {
            Player::P1 => &self.p1_strategies,
            Player::P2 => &self.p2_strategies,
        }
    }

    /// A player's payoff function field.
    pub fn function(&self, player: Player) -> &str {
        match player {
            Player::P1 => &self.p1_function,
            Player::P2 => &self.p2_function,
        }
    }

    pub(crate) fn name_mut(&mut self, player: Player) -> &mut String {
        match player {
            Player::P1 => &mut self.p1_name,
            Player::P2 => &mut self.p2_name,
        }
    }

    pub(crate) fn strategies_mut(&mut self, player: Player) -> &mut String {
        match player {
            Player::P1 => &mut self.p1_strategies,
            Player::P2 => &mut self.p2_strategies,
        }
    }

    pub(crate) fn function_mut(&mut self, player: Player) -> &mut String {
        match player {
            Player::P1 => &mut self.p1_function,
            Player::P2 => &mut self.p2_function,
        }
    }
}
