//! # geocomply-observability
//!
//! Subscriber setup for the workspace's `tracing` output, one span macro per
//! pipeline operation, and [`DecisionMetrics`] counters over classification
//! results.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{DecisionMetrics, MetricsSnapshot};
pub use tracing_setup::init_tracing;
