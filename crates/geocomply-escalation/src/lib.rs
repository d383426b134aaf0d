//! # geocomply-escalation
//!
//! Category detection and threshold escalation.
//!
//! Every request resolves to exactly one `(threshold, escalation_rule)` pair:
//! the strictest threshold among detected categories wins, ties go to the
//! lexically smallest category name, and an empty detection falls back to
//! the configured default category.

pub mod detector;
pub mod engine;
pub mod registry;
pub mod summary;

pub use detector::CategoryDetector;
pub use engine::{AppliedThreshold, DecisionEngine};
pub use registry::{ThresholdRegistry, ThresholdTable};
pub use summary::{ThresholdSummary, ThresholdSummaryEntry};
