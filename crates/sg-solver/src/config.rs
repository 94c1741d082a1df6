//! Where and how to reach the solver.

use std::time::Duration;

/// Default solver address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default path of the solve endpoint.
pub const DEFAULT_ENDPOINT: &str = "/calculate";

/// Environment variable overriding [`SolverConfig::base_url`].
pub const ENV_URL: &str = "SG_SOLVER_URL";

/// Environment variable overriding [`SolverConfig::timeout`], in seconds.
pub const ENV_TIMEOUT: &str = "SG_SOLVER_TIMEOUT_SECS";

/// Connection settings for the solver client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Scheme, host, and port of the solver.
    pub base_url: String,
    /// Path of the solve endpoint, joined onto `base_url`.
    pub endpoint: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl SolverConfig {
    /// Defaults, overridden by `SG_SOLVER_URL` and `SG_SOLVER_TIMEOUT_SECS`
    /// when they are set.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var(ENV_URL).ok(), std::env::var(ENV_TIMEOUT).ok())
    }

    /// Defaults, overridden by raw variable values. Blank or unparsable
    /// values are ignored.
    pub fn from_vars(url: Option<String>, timeout_secs: Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            cfg = cfg.with_base_url(url);
        }
        if let Some(secs) = timeout_secs.and_then(|s| s.trim().parse::<u64>().ok()) {
            cfg = cfg.with_timeout(Duration::from_secs(secs));
        }
        cfg
    }

    /// Set the solver address.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim().to_string();
        self
    }

    /// Set the request timeout. Zero is raised to one second.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.max(Duration::from_secs(1));
        self
    }
}
