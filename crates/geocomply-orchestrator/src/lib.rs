//! # geocomply-orchestrator
//!
//! Drives one feature description through the pipeline:
//!
//! ```text
//! Start → Extract → CheckClearCut → ClearCutExit
//!                                 → FullAnalysis → Standardize → AssessAmbiguity
//!                                   → FuseConfidence → Escalate → Done
//! ```
//!
//! Oracle and regulatory-context calls are bounded by timeouts and can be
//! cancelled. Any collaborator failure yields the fail-safe result: zero
//! confidence, critical priority, human review.

pub mod orchestrator;
pub mod outcome;
pub mod secondary;

pub use orchestrator::ClassificationOrchestrator;
pub use secondary::{entity_quality, secondary_validation};
