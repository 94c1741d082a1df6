//! Turning a solver exchange into something to show.
//!
//! Equilibria are numbered and kept in the order the solver returned them;
//! nothing is filtered or reordered.

use std::fmt;

use serde_json::Value;

use crate::error::SolverResult;
use crate::response::{Equilibrium, SolverOutcome};

/// Notice shown when the exchange itself failed.
pub const FAILURE_NOTICE: &str = "An error occurred while calculating equilibrium.";

/// One numbered equilibrium, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquilibriumBlock {
    /// 1-based position in the solver's list.
    pub number: usize,
    /// Player 1's strategy, pretty-printed.
    pub p1_strategy: String,
    /// Player 2's strategy, pretty-printed.
    pub p2_strategy: String,
    /// Validity range of Nature's probability.
    pub ro_range: String,
}

/// The display state after an exchange completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    /// At least one equilibrium was found.
    Equilibria {
        /// Player 1's name at render time.
        p1_name: String,
        /// Player 2's name at render time.
        p2_name: String,
        /// One block per equilibrium, in solver order.
        blocks: Vec<EquilibriumBlock>,
    },
    /// The solver ran and found nothing.
    NoEquilibria,
    /// The solver reported an error; its message is shown verbatim.
    SolverError(String),
    /// The request or response failed; only a generic notice is shown.
    Failure,
}

/// Map a finished exchange to its display state.
pub fn render(result: &SolverResult<SolverOutcome>, p1_name: &str, p2_name: &str) -> ResultView {
    match result {
        Ok(SolverOutcome::Solved(eqs)) if eqs.is_empty() => ResultView::NoEquilibria,
        Ok(SolverOutcome::Solved(eqs)) => ResultView::Equilibria {
            p1_name: p1_name.to_string(),
            p2_name: p2_name.to_string(),
            blocks: eqs
                .iter()
                .enumerate()
                .map(|(i, eq)| block(i + 1, eq))
                .collect(),
        },
        Ok(SolverOutcome::Rejected { message }) => ResultView::SolverError(message.clone()),
        Err(e) => {
            log::warn!("solve failed: {e}");
            ResultView::Failure
        }
    }
}

fn block(number: usize, eq: &Equilibrium) -> EquilibriumBlock {
    EquilibriumBlock {
        number,
        p1_strategy: pretty(&eq.p1_strategy),
        p2_strategy: pretty(&eq.p2_strategy),
        ro_range: eq.ro_range.clone(),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equilibria {
                p1_name,
                p2_name,
                blocks,
            } => {
                for (i, b) in blocks.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "Equilibrium {}", b.number)?;
                    writeln!(f, "{p1_name} Strategy:")?;
                    writeln!(f, "{}", b.p1_strategy)?;
                    writeln!(f, "{p2_name} Strategy:")?;
                    writeln!(f, "{}", b.p2_strategy)?;
                    write!(f, "Valid Range (ro): {}", b.ro_range)?;
                    if i + 1 < blocks.len() {
                        writeln!(f)?;
                    }
                }
                Ok(())
            }
            Self::NoEquilibria => write!(f, "No Nash Equilibria found."),
            Self::SolverError(message) => write!(f, "Error: {message}"),
            Self::Failure => write!(f, "{FAILURE_NOTICE}"),
        }
    }
}
