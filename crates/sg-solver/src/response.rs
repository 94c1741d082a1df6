//! The solver's answer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SolverError, SolverResult};

/// The `status` value that marks a successful solve.
pub const STATUS_SUCCESS: &str = "success";

/// One equilibrium as the solver reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    /// Player 1's strategy profile; opaque here.
    pub p1_strategy: Value,
    /// Player 2's strategy profile; opaque here.
    pub p2_strategy: Value,
    /// The range of Nature's probability over which the profile holds.
    pub ro_range: String,
}

/// Raw response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverResponse {
    /// `"success"` or anything else.
    pub status: String,
    /// Explanation accompanying a non-success status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Equilibria accompanying a success status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equilibria: Option<Vec<Equilibrium>>,
}

/// What a completed exchange means for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverOutcome {
    /// The solver ran; the list may be empty.
    Solved(Vec<Equilibrium>),
    /// The solver reported an error with this message.
    Rejected {
        /// Message to show verbatim.
        message: String,
    },
}

impl SolverResponse {
    /// Decode a response body.
    pub fn from_json(body: &[u8]) -> SolverResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Interpret the status flag.
    pub fn into_outcome(self) -> SolverResult<SolverOutcome> {
        if self.status == STATUS_SUCCESS {
            let equilibria = self.equilibria.ok_or_else(|| {
                SolverError::MalformedResponse("success without equilibria".to_string())
            })?;
            Ok(SolverOutcome::Solved(equilibria))
        } else {
            Ok(SolverOutcome::Rejected {
                message: self.message.unwrap_or_else(|| format!("status \"{}\"", self.status)),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_with_equilibria() {
        let body = json!({
            "status": "success",
            "equilibria": [{
                "p1_strategy": {"stable": "intervene", "unstable": "intervene"},
                "p2_strategy": {"intervene": "relocate", "not intervene": "relocate"},
                "ro_range": "(0 <= ro) & (ro <= 1)"
            }]
        });
        let resp = SolverResponse::from_json(body.to_string().as_bytes()).unwrap();
        let SolverOutcome::Solved(eqs) = resp.into_outcome().unwrap() else {
            panic!("expected solved outcome");
        };
        assert_eq!(eqs.len(), 1);
        assert_eq!(eqs[0].p1_strategy["stable"], json!("intervene"));
        assert_eq!(eqs[0].ro_range, "(0 <= ro) & (ro <= 1)");
    }

    #[test]
    fn success_with_no_equilibria() {
        let resp = SolverResponse::from_json(br#"{"status":"success","equilibria":[]}"#).unwrap();
        assert_eq!(resp.into_outcome().unwrap(), SolverOutcome::Solved(vec![]));
    }

    #[test]
    fn success_without_equilibria_is_malformed() {
        let resp = SolverResponse::from_json(br#"{"status":"success"}"#).unwrap();
        assert!(matches!(
            resp.into_outcome(),
            Err(SolverError::MalformedResponse(_))
        ));
    }

    #[test]
    fn error_status_carries_message() {
        let resp = SolverResponse::from_json(
            br#"{"status":"error","message":"Undefined variables in payoff function for p1: x"}"#,
        )
        .unwrap();
        assert_eq!(
            resp.into_outcome().unwrap(),
            SolverOutcome::Rejected {
                message: "Undefined variables in payoff function for p1: x".to_string()
            }
        );
    }

    #[test]
    fn any_other_status_is_rejection() {
        let resp = SolverResponse::from_json(br#"{"status":"pending"}"#).unwrap();
        assert!(matches!(
            resp.into_outcome().unwrap(),
            SolverOutcome::Rejected { .. }
        ));
    }

    #[test]
    fn non_json_body_fails_to_decode() {
        let err = SolverResponse::from_json(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, SolverError::Decode(_)));
    }
}
