//! Strategy names as the user types them, resolved into label inputs.
//!
//! Nature's two states come from two separate fields; each player's two
//! actions come from one comma-separated field. Missing or empty entries
//! fall back to positional defaults so a label can always be rendered.

/// Fallback names for Nature's two states.
pub const DEFAULT_STATES: [&str; 2] = ["State 1", "State 2"];

/// Fallback names for a player's two actions.
pub const DEFAULT_ACTIONS: [&str; 2] = ["Action 1", "Action 2"];

/// The resolved names used to label cases. Always two per source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyNames {
    /// Nature's state names.
    pub nature: [String; 2],
    /// Player 1's action names.
    pub p1: [String; 2],
    /// Player 2's action names.
    pub p2: [String; 2],
}

impl Default for StrategyNames {
    fn default() -> Self {
        Self::from_fields("", "", "", "")
    }
}

impl StrategyNames {
    /// Resolve the four raw form fields into label inputs.
    pub fn from_fields(nature_s1: &str, nature_s2: &str, p1_field: &str, p2_field: &str) -> Self {
        Self {
            nature: [
                or_default(nature_s1, DEFAULT_STATES[0]),
                or_default(nature_s2, DEFAULT_STATES[1]),
            ],
            p1: action_pair(p1_field),
            p2: action_pair(p2_field),
        }
    }
}

/// Split a comma-separated action field into exactly two names.
///
/// Entries beyond the second are ignored; missing or blank entries take
/// the positional default instead of failing.
pub fn action_pair(field: &str) -> [String; 2] {
    let mut parts = field.split(',').map(str::trim);
    let first = parts.next().unwrap_or("");
    let second = parts.next().unwrap_or("");
    [
        or_default(first, DEFAULT_ACTIONS[0]),
        or_default(second, DEFAULT_ACTIONS[1]),
    ]
}

fn or_default(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
