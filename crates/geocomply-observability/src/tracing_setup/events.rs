//! Named log events emitted at pipeline decision points.

use geocomply_core::models::{ClassificationMethod, ReviewPriority};
use tracing::{info, warn};

pub fn clear_cut_exit(request_id: &str, needs_geo_logic: bool, confidence: f64) {
    info!(
        event = "clear_cut_exit",
        request_id,
        needs_geo_logic,
        confidence,
        "clear-cut verdict, oracle skipped"
    );
}

/// The pipeline gave up on a collaborator and returned the fail-safe result.
pub fn fail_safe_triggered(request_id: &str, cause: &str) {
    warn!(
        event = "fail_safe_triggered",
        request_id,
        cause,
        "routing to human review"
    );
}

pub fn review_escalated(request_id: &str, priority: ReviewPriority, reason: &str) {
    info!(
        event = "review_escalated",
        request_id,
        priority = %priority,
        reason,
        "human review required"
    );
}

pub fn classification_completed(
    request_id: &str,
    method: ClassificationMethod,
    confidence: f64,
    elapsed_ms: u64,
) {
    info!(
        event = "classification_completed",
        request_id,
        method = ?method,
        confidence,
        elapsed_ms,
        "classification completed"
    );
}
