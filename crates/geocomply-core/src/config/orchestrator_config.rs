use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Pipeline timeouts and short-circuit policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    pub oracle_timeout_ms: u64,
    pub context_timeout_ms: u64,
    /// Clear-cut extraction verdicts at or above this skip the oracle.
    pub clear_cut_threshold: f64,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            oracle_timeout_ms: defaults::DEFAULT_ORACLE_TIMEOUT_MS,
            context_timeout_ms: defaults::DEFAULT_CONTEXT_TIMEOUT_MS,
            clear_cut_threshold: defaults::DEFAULT_CLEAR_CUT_THRESHOLD,
        }
    }
}

impl OrchestratorConfig {
    pub fn oracle_timeout(&self) -> Duration {
        Duration::from_millis(self.oracle_timeout_ms)
    }

    pub fn context_timeout(&self) -> Duration {
        Duration::from_millis(self.context_timeout_ms)
    }
}
