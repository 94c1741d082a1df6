use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the two strategic players. Nature is not a player here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// The first mover, who observes Nature's state.
    P1,
    /// The second mover, who observes Player 1's action.
    P2,
}

impl Player {
    /// Both players, P1 first.
    pub const BOTH: [Player; 2] = [Self::P1, Self::P2];

    /// Short key used in payloads and commands.
    pub fn key(self) -> &'static str {
        match self {
            Self::P1 => "p1",
            Self::P2 => "p2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Player {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "p1" | "1" => Ok(Self::P1),
            "p2" | "2" => Ok(Self::P2),
            _ => Err(CoreError::UnknownPlayer(s.trim().to_string())),
        }
    }
}
