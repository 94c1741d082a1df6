use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of joint outcomes: two Nature states × two P1 actions × two P2 actions.
pub const CASE_COUNT: usize = 8;

/// One of the eight joint outcomes of the game tree.
///
/// The identifiers are shared by both players' tables and are what the
/// solver keys payoff data by, so they serialize as `case1` … `case8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseId {
    /// Second Nature state, first P1 action, first P2 action.
    Case1,
    /// Second Nature state, second P1 action, first P2 action.
    Case2,
    /// First Nature state, first P1 action, first P2 action.
    Case3,
    /// First Nature state, second P1 action, first P2 action.
    Case4,
    /// Second Nature state, first P1 action, second P2 action.
    Case5,
    /// Second Nature state, second P1 action, second P2 action.
    Case6,
    /// First Nature state, first P1 action, second P2 action.
    Case7,
    /// First Nature state, second P1 action, second P2 action.
    Case8,
}

/// Which of a pair of configured names a factor selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Factor value 0.
    First,
    /// Factor value 1.
    Second,
}

impl Slot {
    /// Position in a two-element name array.
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// The (Nature, P1, P2) triple a case stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Factors {
    /// Nature's state.
    pub nature: Slot,
    /// Player 1's action.
    pub p1: Slot,
    /// Player 2's action.
    pub p2: Slot,
}

impl CaseId {
    /// All cases in catalog order.
    pub const ALL: [CaseId; CASE_COUNT] = [
        Self::Case1,
        Self::Case2,
        Self::Case3,
        Self::Case4,
        Self::Case5,
        Self::Case6,
        Self::Case7,
        Self::Case8,
    ];

    /// Iterate the catalog in order. Every call yields the same sequence.
    pub fn in_order() -> impl Iterator<Item = CaseId> {
        Self::ALL.into_iter()
    }

    /// Zero-based position in the catalog.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The fixed factor assignment for this case.
    ///
    /// The solver interprets payload keys through this exact table, so it
    /// must never be derived from data.
    pub fn factors(self) -> Factors {
        use Slot::{First, Second};
        let (nature, p1, p2) = match self {
            Self::Case1 => (Second, First, First),
            Self::Case2 => (Second, Second, First),
            Self::Case3 => (First, First, First),
            Self::Case4 => (First, Second, First),
            Self::Case5 => (Second, First, Second),
            Self::Case6 => (Second, Second, Second),
            Self::Case7 => (First, First, Second),
            Self::Case8 => (First, Second, Second),
        };
        Factors { nature, p1, p2 }
    }

    /// The wire identifier, e.g. `"case3"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Case1 => "case1",
            Self::Case2 => "case2",
            Self::Case3 => "case3",
            Self::Case4 => "case4",
            Self::Case5 => "case5",
            Self::Case6 => "case6",
            Self::Case7 => "case7",
            Self::Case8 => "case8",
        }
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `case3`, `Case3`, or a bare `3`.
impl FromStr for CaseId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        let digits = lower.strip_prefix("case").unwrap_or(&lower);
        match digits.parse::<usize>() {
            Ok(n @ 1..=CASE_COUNT) => Ok(Self::ALL[n - 1]),
            _ => Err(CoreError::UnknownCase(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(case: CaseId) -> (usize, usize, usize) {
        let f = case.factors();
        (f.nature.index(), f.p1.index(), f.p2.index())
    }

    #[test]
    fn factor_table_is_fixed() {
        let expected = [
            (1, 0, 0),
            (1, 1, 0),
            (0, 0, 0),
            (0, 1, 0),
            (1, 0, 1),
            (1, 1, 1),
            (0, 0, 1),
            (0, 1, 1),
        ];
        for (case, want) in CaseId::in_order().zip(expected) {
            assert_eq!(bits(case), want, "{case}");
        }
    }

    #[test]
    fn catalog_order_is_stable() {
        let first: Vec<_> = CaseId::in_order().collect();
        let second: Vec<_> = CaseId::in_order().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), CASE_COUNT);
        let names: Vec<_> = first.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            ["case1", "case2", "case3", "case4", "case5", "case6", "case7", "case8"]
        );
    }

    #[test]
    fn every_factor_combination_appears_once() {
        let mut seen: Vec<_> = CaseId::in_order().map(bits).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), CASE_COUNT);
    }

    #[test]
    fn index_matches_position() {
        for (i, case) in CaseId::in_order().enumerate() {
            assert_eq!(case.index(), i);
        }
    }

    #[test]
    fn serializes_as_wire_identifier() {
        assert_eq!(serde_json::to_string(&CaseId::Case7).unwrap(), "\"case7\"");
        let parsed: CaseId = serde_json::from_str("\"case2\"").unwrap();
        assert_eq!(parsed, CaseId::Case2);
    }

    #[test]
    fn parse_accepts_prefixed_and_bare() {
        assert_eq!("case4".parse::<CaseId>().unwrap(), CaseId::Case4);
        assert_eq!("Case8".parse::<CaseId>().unwrap(), CaseId::Case8);
        assert_eq!(" 1 ".parse::<CaseId>().unwrap(), CaseId::Case1);
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!("case0".parse::<CaseId>().is_err());
        assert!("case9".parse::<CaseId>().is_err());
        assert!("nine".parse::<CaseId>().is_err());
    }
}
