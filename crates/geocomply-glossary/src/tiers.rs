//! Confidence assigned to each kind of glossary match.

use geocomply_core::models::MatchTier;
use serde::{Deserialize, Serialize};

/// Match confidences for one entity type. A tier an entity type never
/// produces is left at 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    pub exact: f64,
    pub numeric: f64,
    pub normalized: f64,
    pub text_in_alias: f64,
    pub alias_in_text: f64,
    pub synonym_in_text: f64,
}

impl TierTable {
    pub fn score(&self, tier: MatchTier) -> f64 {
        match tier {
            MatchTier::Exact => self.exact,
            MatchTier::Numeric => self.numeric,
            MatchTier::Normalized => self.normalized,
            MatchTier::TextInAlias => self.text_in_alias,
            MatchTier::AliasInText => self.alias_in_text,
            MatchTier::SynonymInText => self.synonym_in_text,
            MatchTier::NoMatch => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceTiers {
    pub location: TierTable,
    pub age: TierTable,
    pub terminology: TierTable,
}

impl Default for ConfidenceTiers {
    fn default() -> Self {
        Self {
            location: TierTable {
                exact: 1.0,
                numeric: 0.0,
                normalized: 0.95,
                text_in_alias: 0.9,
                alias_in_text: 0.8,
                synonym_in_text: 0.0,
            },
            age: TierTable {
                exact: 1.0,
                numeric: 0.95,
                normalized: 0.95,
                text_in_alias: 0.0,
                alias_in_text: 0.8,
                synonym_in_text: 0.7,
            },
            terminology: TierTable {
                exact: 1.0,
                numeric: 0.0,
                normalized: 0.95,
                text_in_alias: 0.0,
                alias_in_text: 0.9,
                synonym_in_text: 0.8,
            },
        }
    }
}
