//! # geocomply-ambiguity
//!
//! Flags missing and vague entities, prices each one as a confidence
//! penalty, and folds the lot into a single recommended action.
//!
//! Weights and vocabularies are a versioned data table ([`AmbiguityWeights`]);
//! the assessor itself holds no mutable state.

pub mod assessor;
pub mod context;
pub mod report;
pub mod resolver;
pub mod weights;

pub use assessor::AmbiguityAssessor;
pub use context::AmbiguityContext;
pub use report::{AmbiguityReport, AmbiguityStatus};
pub use weights::{
    AmbiguityWeights, DefaultResolution, MissingEntityRule, UnclearTerminologyRule, VagueCategory,
};
