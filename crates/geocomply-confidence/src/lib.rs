//! # geocomply-confidence
//!
//! Fuses the oracle's confidence with the secondary validation score into
//! one auditable value, and grades it on the low/medium/high rubric.
//!
//! ```text
//! base      = primary*0.7 + secondary*0.3
//! entity    = (entity_quality - 0.5) * 0.2
//! cross     = (cross_validation - 0.5) * 0.15
//! diversity = min(types_present * 0.05, 0.10)
//! final     = clamp(base + entity + cross + diversity, 0, 1)
//! ```

pub mod alignment;
pub mod metrics;
pub mod rubric;
pub mod scorer;

pub use alignment::AlignmentCheck;
pub use metrics::{ComponentScores, ConfidenceMetrics, RubricThresholds};
pub use scorer::ConfidenceScorer;
