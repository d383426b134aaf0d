mod ambiguity;
mod breakdown;
mod category;
mod classification;
mod confidence;
mod decision;
mod entity;
mod feedback;
mod oracle;

pub use ambiguity::{
    AmbiguityAssessment, AmbiguityKind, DisambiguationResult, RecommendedAction, ResolutionStrategy,
    ResolvedEntity,
};
pub use breakdown::{ConfidenceBreakdown, DiversityFlags, ScoringFactors};
pub use category::{ComplianceCategory, EscalationRule, ReviewPriority, RiskLevel};
pub use classification::{
    input_hash, ClassificationMethod, ClassificationResult, PipelineStage, SecondaryBreakdown,
};
pub use confidence::{Confidence, ConfidenceLevel};
pub use decision::{CategoryThreshold, DecisionResult, EscalationAction, ThresholdEvaluation};
pub use entity::{
    ClearCutVerdict, EntityMatch, EntityType, ExtractionResult, ExtractionSource, MatchTier,
    Span, StandardizedEntity,
};
pub use feedback::{FeedbackCorrection, FeedbackOutcome};
pub use oracle::{ClassificationFlag, OracleAssessment, OracleRequest, Regulation};
