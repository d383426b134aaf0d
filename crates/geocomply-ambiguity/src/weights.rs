//! Versioned weight table for ambiguity scoring.
//!
//! Everything tunable lives here: per-class confidence impact, review flag,
//! review priority, and the vocabularies that trigger each class.

use std::path::Path;

use geocomply_core::constants::MAX_AMBIGUITY_PENALTY;
use geocomply_core::errors::ConfigError;
use geocomply_core::models::ReviewPriority;
use serde::{Deserialize, Serialize};

/// Missing-entity class that only fires when one of `triggers` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingEntityRule {
    pub impact: f64,
    pub requires_review: bool,
    pub priority: ReviewPriority,
    pub triggers: Vec<String>,
    pub alternatives: Vec<String>,
}

/// One vague-entity category, matched against the entity text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VagueCategory {
    pub name: String,
    pub patterns: Vec<String>,
    pub impact: f64,
    pub requires_review: bool,
    pub priority: ReviewPriority,
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnclearTerminologyRule {
    /// Terminology entities extracted below this confidence are unclear.
    pub confidence_below: f64,
    pub impact: f64,
    pub requires_review: bool,
    pub priority: ReviewPriority,
}

/// Canned resolution for a well-known vague term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultResolution {
    pub term: String,
    pub resolved: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbiguityWeights {
    pub version: String,
    pub missing_location: MissingEntityRule,
    pub missing_age: MissingEntityRule,
    /// Checked in order; the first category with a matching pattern wins,
    /// so longer phrases (`western europe`, `older adult`) sit before the
    /// bare words they contain.
    pub vague_location: Vec<VagueCategory>,
    pub vague_age: Vec<VagueCategory>,
    pub unclear_terminology: UnclearTerminologyRule,
    pub regulatory_clues: Vec<String>,
    pub business_clues: Vec<String>,
    pub minor_protection_clues: Vec<String>,
    pub age_verification_clues: Vec<String>,
    pub default_resolutions: Vec<DefaultResolution>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn vague(
    name: &str,
    patterns: &[&str],
    impact: f64,
    requires_review: bool,
    priority: ReviewPriority,
    alternatives: &[&str],
) -> VagueCategory {
    VagueCategory {
        name: name.to_string(),
        patterns: strings(patterns),
        impact,
        requires_review,
        priority,
        alternatives: strings(alternatives),
    }
}

impl Default for AmbiguityWeights {
    fn default() -> Self {
        use ReviewPriority::{High, Low, Medium};
        Self {
            version: "1.0.0".to_string(),
            missing_location: MissingEntityRule {
                impact: 0.25,
                requires_review: true,
                priority: Medium,
                triggers: strings(&[
                    "gdpr",
                    "ccpa",
                    "coppa",
                    "dsa",
                    "law",
                    "regulation",
                    "compliance",
                ]),
                alternatives: strings(&[
                    "Feature may be location-agnostic",
                    "Location implied by context",
                ]),
            },
            missing_age: MissingEntityRule {
                impact: 0.30,
                requires_review: true,
                priority: High,
                triggers: strings(&[
                    "child",
                    "minor",
                    "parent",
                    "guardian",
                    "coppa",
                    "age verification",
                ]),
                alternatives: strings(&[
                    "Age verification required",
                    "Minor protection applicable",
                ]),
            },
            vague_location: vec![
                vague(
                    "overseas",
                    &["overseas", "abroad", "international", "foreign"],
                    0.30,
                    true,
                    Medium,
                    &["Non-domestic markets", "International users", "Global deployment"],
                ),
                vague(
                    "domestic",
                    &["domestic", "local", "national", "homeland"],
                    0.20,
                    false,
                    Low,
                    &["Home country only", "National scope", "Local implementation"],
                ),
                vague(
                    "regional",
                    &[
                        "western europe",
                        "eastern europe",
                        "southeast asia",
                        "middle east",
                        "latin america",
                        "north africa",
                        "sub-saharan africa",
                        "nordic countries",
                    ],
                    0.15,
                    false,
                    Low,
                    &["Multi-country region", "Economic zone", "Cultural region"],
                ),
                vague(
                    "continental",
                    &["europe", "asia", "africa", "americas", "oceania"],
                    0.25,
                    true,
                    Medium,
                    &["Continental scope", "Multiple regions", "Broad geographic area"],
                ),
                vague(
                    "hemispheric",
                    &[
                        "northern hemisphere",
                        "southern hemisphere",
                        "eastern hemisphere",
                        "western hemisphere",
                    ],
                    0.40,
                    true,
                    Medium,
                    &["Global scope", "Multi-continental", "Worldwide deployment"],
                ),
                vague(
                    "economic_zone",
                    &["eu", "nafta", "asean", "mercosur", "brics"],
                    0.10,
                    false,
                    Low,
                    &["Trade bloc", "Economic partnership", "Regulatory union"],
                ),
            ],
            vague_age: vec![
                vague(
                    "teen",
                    &["teen", "teenager", "adolescent"],
                    0.20,
                    false,
                    Medium,
                    &["13-17 years", "Adolescents", "High school age"],
                ),
                vague(
                    "young_adult",
                    &["young adult", "college age", "university age"],
                    0.25,
                    false,
                    Medium,
                    &["18-25 years", "College age", "Emerging adults"],
                ),
                vague(
                    "elderly",
                    &["elderly", "senior", "older adult"],
                    0.20,
                    false,
                    Medium,
                    &["65+ years", "Senior citizens", "Retirement age"],
                ),
                vague(
                    "adult",
                    &["adult", "grown-up", "mature"],
                    0.30,
                    true,
                    Medium,
                    &["18+ years", "General adult population", "All ages above minor"],
                ),
                vague(
                    "youth",
                    &["youth", "young people", "kids"],
                    0.35,
                    true,
                    High,
                    &["Under 18", "Minors", "Children and teens"],
                ),
                vague(
                    "general",
                    &["users", "people", "individuals", "persons"],
                    0.40,
                    true,
                    High,
                    &["All ages", "Age-agnostic", "No age restriction"],
                ),
            ],
            unclear_terminology: UnclearTerminologyRule {
                confidence_below: 0.5,
                impact: 0.15,
                requires_review: false,
                priority: Low,
            },
            regulatory_clues: strings(&[
                "gdpr",
                "ccpa",
                "coppa",
                "dsa",
                "law",
                "regulation",
                "compliance",
            ]),
            business_clues: strings(&["market", "expansion", "launch", "rollout", "pilot"]),
            minor_protection_clues: strings(&[
                "parental consent",
                "guardian",
                "supervision",
                "coppa",
                "child protection",
            ]),
            age_verification_clues: strings(&[
                "age verification",
                "id check",
                "identity verification",
                "age gate",
            ]),
            default_resolutions: vec![
                DefaultResolution {
                    term: "teen".to_string(),
                    resolved: "age_range:13-17".to_string(),
                },
                DefaultResolution {
                    term: "overseas".to_string(),
                    resolved: "Unknown_International".to_string(),
                },
                DefaultResolution {
                    term: "western europe".to_string(),
                    resolved: "Western_Europe".to_string(),
                },
                DefaultResolution {
                    term: "adult".to_string(),
                    resolved: "age_range:18-65".to_string(),
                },
            ],
        }
    }
}

impl AmbiguityWeights {
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let weights: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        weights.validate()?;
        Ok(weights)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let weights: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        weights.validate()?;
        Ok(weights)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Every impact must lie in [0, 0.5].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let check = |field: String, impact: f64| {
            if (0.0..=MAX_AMBIGUITY_PENALTY).contains(&impact) {
                Ok(())
            } else {
                Err(ConfigError::ValidationFailed {
                    field,
                    message: format!("impact {impact} must be between 0.0 and {MAX_AMBIGUITY_PENALTY}"),
                })
            }
        };
        check("missing_location.impact".to_string(), self.missing_location.impact)?;
        check("missing_age.impact".to_string(), self.missing_age.impact)?;
        check(
            "unclear_terminology.impact".to_string(),
            self.unclear_terminology.impact,
        )?;
        for category in &self.vague_location {
            check(format!("vague_location.{}", category.name), category.impact)?;
        }
        for category in &self.vague_age {
            check(format!("vague_age.{}", category.name), category.impact)?;
        }
        Ok(())
    }

    pub fn default_resolution(&self, entity_text: &str) -> Option<&DefaultResolution> {
        let key = entity_text.trim().to_lowercase();
        self.default_resolutions.iter().find(|r| r.term == key)
    }
}
