use serde::{Deserialize, Serialize};

/// Request-level signals available to the assessor besides the text itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmbiguityContext {
    /// Tags of deterministic rules that matched this request.
    pub rule_tags: Vec<String>,
}

impl AmbiguityContext {
    pub fn with_rule_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rule_tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn clues(&self) -> impl Iterator<Item = String> + '_ {
        self.rule_tags.iter().map(|t| format!("rule_tag:{t}"))
    }
}
