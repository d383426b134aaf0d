//! AmbiguityAssessor: detects missing and vague entities.

use std::path::Path;

use geocomply_core::config::AmbiguityConfig;
use geocomply_core::errors::ConfigError;
use geocomply_core::models::{
    AmbiguityAssessment, AmbiguityKind, EntityMatch, EntityType, ResolutionStrategy,
};
use geocomply_core::text::KeywordSet;
use tracing::debug;

use crate::context::AmbiguityContext;
use crate::weights::{AmbiguityWeights, MissingEntityRule, VagueCategory};

/// Placeholder entity text for missing-entity assessments.
pub const MISSING_ENTITY: &str = "<missing>";

/// Trigger, clue and vague-pattern lists of a weight table, compiled.
#[derive(Debug, Clone)]
struct Vocabulary {
    missing_location: KeywordSet,
    missing_age: KeywordSet,
    vague_location: Vec<KeywordSet>,
    vague_age: Vec<KeywordSet>,
    regulatory: KeywordSet,
    business: KeywordSet,
    minor_protection: KeywordSet,
    age_verification: KeywordSet,
}

impl Vocabulary {
    fn compile(weights: &AmbiguityWeights) -> Self {
        fn clues(list: &[String]) -> KeywordSet {
            KeywordSet::prefixes(list.iter().cloned())
        }
        fn vague(categories: &[VagueCategory]) -> Vec<KeywordSet> {
            categories.iter().map(|c| clues(&c.patterns)).collect()
        }
        Self {
            missing_location: clues(&weights.missing_location.triggers),
            missing_age: clues(&weights.missing_age.triggers),
            vague_location: vague(&weights.vague_location),
            vague_age: vague(&weights.vague_age),
            regulatory: clues(&weights.regulatory_clues),
            business: clues(&weights.business_clues),
            minor_protection: clues(&weights.minor_protection_clues),
            age_verification: clues(&weights.age_verification_clues),
        }
    }
}

/// Stateless ambiguity detector and resolver.
///
/// Holds the weight table and the resolution policy; every call is a pure
/// function of its arguments.
#[derive(Debug, Clone)]
pub struct AmbiguityAssessor {
    pub(crate) weights: AmbiguityWeights,
    pub(crate) config: AmbiguityConfig,
    vocabulary: Vocabulary,
}

impl Default for AmbiguityAssessor {
    fn default() -> Self {
        Self::new(AmbiguityWeights::default(), AmbiguityConfig::default())
    }
}

impl AmbiguityAssessor {
    pub fn new(weights: AmbiguityWeights, config: AmbiguityConfig) -> Self {
        let vocabulary = Vocabulary::compile(&weights);
        Self {
            weights,
            config,
            vocabulary,
        }
    }

    /// Build from config, loading the weight table from `weights_path` when set.
    pub fn from_config(config: &AmbiguityConfig) -> Result<Self, ConfigError> {
        let weights = match &config.weights_path {
            Some(path) => AmbiguityWeights::from_file(Path::new(path))?,
            None => AmbiguityWeights::default(),
        };
        Ok(Self::new(weights, config.clone()))
    }

    pub fn weights(&self) -> &AmbiguityWeights {
        &self.weights
    }

    pub fn config(&self) -> &AmbiguityConfig {
        &self.config
    }

    /// Assess `entities` extracted from `text`.
    ///
    /// Missing-entity classes fire only when the text carries a trigger
    /// keyword; vague classes are matched against each entity's own text.
    pub fn assess_ambiguity(
        &self,
        entities: &[EntityMatch],
        text: &str,
        context: &AmbiguityContext,
    ) -> Vec<AmbiguityAssessment> {
        let lowered = text.to_lowercase();
        let has = |t: EntityType| entities.iter().any(|e| e.entity_type == t);
        let mut assessments = Vec::new();

        if !has(EntityType::Location) {
            assessments.extend(self.missing(
                AmbiguityKind::MissingLocation,
                &self.weights.missing_location,
                &self.vocabulary.missing_location,
                ResolutionStrategy::AssignUnknown,
                "regulatory_signal",
                &lowered,
                context,
            ));
        }
        if !has(EntityType::Age) {
            assessments.extend(self.missing(
                AmbiguityKind::MissingAge,
                &self.weights.missing_age,
                &self.vocabulary.missing_age,
                ResolutionStrategy::FlagHumanReview,
                "minor_signal",
                &lowered,
                context,
            ));
        }

        for entity in entities {
            let entity_text = entity.text.trim().to_lowercase();
            let assessment = match entity.entity_type {
                EntityType::Location => self
                    .vague(&self.weights.vague_location, &self.vocabulary.vague_location, &entity_text)
                    .map(|category| {
                        let strategy = if category.requires_review {
                            ResolutionStrategy::AssignUnknown
                        } else {
                            ResolutionStrategy::InferFromContext
                        };
                        let clues = self.location_clues(&lowered, context);
                        vague_assessment(AmbiguityKind::VagueLocation, category, entity_text, clues, strategy)
                    }),
                EntityType::Age => self
                    .vague(&self.weights.vague_age, &self.vocabulary.vague_age, &entity_text)
                    .map(|category| {
                        let strategy = if category.requires_review {
                            ResolutionStrategy::FlagHumanReview
                        } else {
                            ResolutionStrategy::ApplyDefaultRules
                        };
                        let clues = self.age_clues(&lowered, context);
                        vague_assessment(AmbiguityKind::VagueAge, category, entity_text, clues, strategy)
                    }),
                EntityType::Terminology => self.unclear_terminology(entity, entity_text, context),
            };
            assessments.extend(assessment);
        }

        debug!(
            assessments = assessments.len(),
            entities = entities.len(),
            "ambiguity assessed"
        );
        assessments
    }

    fn missing(
        &self,
        kind: AmbiguityKind,
        rule: &MissingEntityRule,
        triggers: &KeywordSet,
        strategy: ResolutionStrategy,
        clue_prefix: &str,
        lowered: &str,
        context: &AmbiguityContext,
    ) -> Option<AmbiguityAssessment> {
        let signals = triggers.find(lowered);
        if signals.is_empty() {
            return None;
        }
        let context_clues = signals
            .iter()
            .map(|s| format!("{clue_prefix}:{s}"))
            .chain(context.clues())
            .collect();
        Some(AmbiguityAssessment {
            kind,
            confidence_impact: rule.impact,
            entity_text: MISSING_ENTITY.to_string(),
            context_clues,
            suggested_resolution: strategy,
            alternative_interpretations: rule.alternatives.clone(),
            requires_human_review: rule.requires_review,
            priority: rule.priority,
        })
    }

    fn vague<'w>(
        &self,
        categories: &'w [VagueCategory],
        patterns: &[KeywordSet],
        entity_text: &str,
    ) -> Option<&'w VagueCategory> {
        categories
            .iter()
            .zip(patterns)
            .find(|(_, p)| p.is_match(entity_text))
            .map(|(c, _)| c)
    }

    fn unclear_terminology(
        &self,
        entity: &EntityMatch,
        entity_text: String,
        context: &AmbiguityContext,
    ) -> Option<AmbiguityAssessment> {
        let rule = &self.weights.unclear_terminology;
        if entity.confidence >= rule.confidence_below {
            return None;
        }
        Some(AmbiguityAssessment {
            kind: AmbiguityKind::UnclearTerminology,
            confidence_impact: rule.impact,
            entity_text,
            context_clues: context.clues().collect(),
            suggested_resolution: ResolutionStrategy::RequestClarification,
            alternative_interpretations: Vec::new(),
            requires_human_review: rule.requires_review,
            priority: rule.priority,
        })
    }

    fn location_clues(&self, lowered: &str, context: &AmbiguityContext) -> Vec<String> {
        let vocabulary = &self.vocabulary;
        prefixed("regulatory_signal", vocabulary.regulatory.find(lowered))
            .chain(prefixed("business_signal", vocabulary.business.find(lowered)))
            .chain(context.clues())
            .collect()
    }

    fn age_clues(&self, lowered: &str, context: &AmbiguityContext) -> Vec<String> {
        let vocabulary = &self.vocabulary;
        prefixed("minor_protection", vocabulary.minor_protection.find(lowered))
            .chain(prefixed("age_verification", vocabulary.age_verification.find(lowered)))
        .chain(context.clues())
        .collect()
    }
}

fn prefixed(prefix: &'static str, found: Vec<String>) -> impl Iterator<Item = String> {
    found.into_iter().map(move |f| format!("{prefix}:{f}"))
}

fn vague_assessment(
    kind: AmbiguityKind,
    category: &VagueCategory,
    entity_text: String,
    context_clues: Vec<String>,
    suggested_resolution: ResolutionStrategy,
) -> AmbiguityAssessment {
    AmbiguityAssessment {
        kind,
        confidence_impact: category.impact,
        entity_text,
        context_clues,
        suggested_resolution,
        alternative_interpretations: category.alternatives.clone(),
        requires_human_review: category.requires_review,
        priority: category.priority,
    }
}
