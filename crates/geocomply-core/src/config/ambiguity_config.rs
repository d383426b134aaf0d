use serde::{Deserialize, Serialize};

use super::defaults;

/// Resolution policy for combined ambiguity penalties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbiguityConfig {
    pub penalty_cap: f64,
    /// Penalty above which the recommended action is human review.
    pub review_penalty: f64,
    /// Penalty above which the recommended action is an elevated threshold.
    pub elevated_penalty: f64,
    /// Penalty above which fused recommendations get a caution note.
    pub caution_note_penalty: f64,
    pub use_default_resolutions: bool,
    /// Optional path to a TOML weight table replacing the built-in one.
    pub weights_path: Option<String>,
}

impl Default for AmbiguityConfig {
    fn default() -> Self {
        Self {
            penalty_cap: defaults::DEFAULT_PENALTY_CAP,
            review_penalty: defaults::DEFAULT_REVIEW_PENALTY,
            elevated_penalty: defaults::DEFAULT_ELEVATED_PENALTY,
            caution_note_penalty: defaults::DEFAULT_CAUTION_NOTE_PENALTY,
            use_default_resolutions: defaults::DEFAULT_USE_DEFAULT_RESOLUTIONS,
            weights_path: None,
        }
    }
}
