//! Case labels derived from the current strategy names.
//!
//! There is one label set per game, shared by both players' tables, so the
//! row labels of the two tables can never disagree.

use crate::case::{CASE_COUNT, CaseId};
use crate::names::StrategyNames;

/// Label a single case as `"<nature>, <p1>, <p2>"`.
pub fn derive_label(
    case: CaseId,
    nature: &[String; 2],
    p1: &[String; 2],
    p2: &[String; 2],
) -> String {
    let f = case.factors();
    format!(
        "{}, {}, {}",
        nature[f.nature.index()],
        p1[f.p1.index()],
        p2[f.p2.index()]
    )
}

/// Labels for every case, recomputed whenever a name source changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseLabels {
    labels: [String; CASE_COUNT],
}

impl CaseLabels {
    /// Derive all eight labels from the given names.
    pub fn derive(names: &StrategyNames) -> Self {
        Self {
            labels: CaseId::ALL.map(|case| derive_label(case, &names.nature, &names.p1, &names.p2)),
        }
    }

    /// The label for one case.
    pub fn get(&self, case: CaseId) -> &str {
        &self.labels[case.index()]
    }

    /// Labels paired with their case, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (CaseId, &str)> {
        CaseId::in_order().zip(self.labels.iter().map(String::as_str))
    }
}

impl Default for CaseLabels {
    fn default() -> Self {
        Self::derive(&StrategyNames::default())
    }
}
