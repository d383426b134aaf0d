use serde::{Deserialize, Serialize};

use super::EntityType;

/// A reviewer's correction: `original_text` should map to `correct_mapping`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackCorrection {
    pub entity_type: EntityType,
    pub original_text: String,
    pub correct_mapping: String,
    #[serde(default = "default_feedback_confidence")]
    pub confidence: f64,
    #[serde(default = "default_feedback_source")]
    pub source: String,
}

fn default_feedback_confidence() -> f64 {
    1.0
}

fn default_feedback_source() -> String {
    "user".to_string()
}

/// What applying a correction did to the glossary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum FeedbackOutcome {
    AliasAdded { canonical: String, version: String },
    AlreadyKnown { canonical: String },
}
