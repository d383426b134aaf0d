//! # geocomply-core
//!
//! Foundation crate for the GeoComply decision engine.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GeoComplyConfig;
pub use errors::{GeoComplyError, GeoComplyResult};
pub use models::{
    ClassificationFlag, ComplianceCategory, Confidence, ConfidenceLevel, EntityMatch, EntityType,
    EscalationRule, ReviewPriority, RiskLevel,
};
