//! HTTP client for the solver's `/calculate` endpoint.

use reqwest::Url;

use crate::config::SolverConfig;
use crate::error::{SolverError, SolverResult};
use crate::request::RequestPayload;
use crate::response::{SolverOutcome, SolverResponse};

/// Posts payloads to the solver. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SolverClient {
    config: SolverConfig,
    http: reqwest::Client,
}

impl SolverClient {
    /// Create a client for the given configuration.
    pub fn new(config: SolverConfig) -> SolverResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("sg-solver/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    /// Create a client from `SG_SOLVER_URL` / `SG_SOLVER_TIMEOUT_SECS`.
    pub fn from_env() -> SolverResult<Self> {
        Self::new(SolverConfig::from_env())
    }

    /// The configuration in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Full URL of the solve endpoint.
    pub fn endpoint(&self) -> SolverResult<Url> {
        Url::parse(&self.config.base_url)
            .and_then(|base| base.join(&self.config.endpoint))
            .map_err(|e| SolverError::InvalidUrl(format!("{}: {e}", self.config.base_url)))
    }

    /// Send one payload and wait for the answer.
    ///
    /// The body is decoded whatever the HTTP status, since the solver
    /// reports its own errors as JSON alongside a 5xx status. No retry is
    /// attempted and earlier in-flight requests are left to complete.
    pub async fn solve(&self, payload: &RequestPayload) -> SolverResult<SolverOutcome> {
        let url = self.endpoint()?;
        log::info!("posting game to {url}");

        let resp = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .inspect_err(|e| log::warn!("solver request failed: {e}"))?;
        let status = resp.status();
        let body = resp.bytes().await?;
        log::debug!("solver answered {status} with {} bytes", body.len());

        let outcome = SolverResponse::from_json(&body)
            .and_then(SolverResponse::into_outcome)
            .inspect_err(|e| log::warn!("unreadable solver response ({status}): {e}"))?;
        if let SolverOutcome::Rejected { message } = &outcome {
            log::warn!("solver rejected the game: {message}");
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sg_core::{CaseId, PayoffTable, Player};

    use super::*;
    use crate::request::RequestBuilder;

    fn payload() -> RequestPayload {
        let mut p1 = PayoffTable::new(Player::P1);
        p1.add_variable("a").unwrap();
        p1.set_cell(0, CaseId::Case1, 1.0).unwrap();
        let mut p2 = PayoffTable::new(Player::P2);
        p2.add_variable("b").unwrap();
        RequestBuilder {
            p1_name: "Player 1",
            p2_name: "Player 2",
            nature: ["stable", "unstable"],
            p1_strategies: "x, y",
            p2_strategies: "u, v",
            p1_function: "",
            p2_function: "",
            p1_table: &p1,
            p2_table: &p2,
        }
        .build()
        .unwrap()
    }

    #[test]
    fn endpoint_joins_path() {
        let client = SolverClient::new(SolverConfig::default()).unwrap();
        assert_eq!(
            client.endpoint().unwrap().as_str(),
            "http://127.0.0.1:5000/calculate"
        );
    }

    #[test]
    fn invalid_base_url() {
        let cfg = SolverConfig::default().with_base_url("not a url");
        let client = SolverClient::new(cfg).unwrap();
        assert!(matches!(client.endpoint(), Err(SolverError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn unreachable_solver_is_transport_error() {
        // Nothing listens on the discard port.
        let cfg = SolverConfig::default()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let client = SolverClient::new(cfg).unwrap();
        let err = client.solve(&payload()).await.unwrap_err();
        assert!(err.is_transport());
        assert!(matches!(err, SolverError::Transport(_)));
    }
}
