//! Span definitions per operation: classification, extraction, oracle,
//! ambiguity, fusion, escalation, feedback.

/// Create a classification span.
#[macro_export]
macro_rules! classification_span {
    ($request_id:expr) => {
        tracing::info_span!("geocomply.classification", request_id = %$request_id)
    };
}

/// Create an extraction span.
#[macro_export]
macro_rules! extraction_span {
    ($text_len:expr) => {
        tracing::debug_span!("geocomply.extraction", text_len = $text_len)
    };
}

/// Create an oracle call span.
#[macro_export]
macro_rules! oracle_span {
    ($timeout_ms:expr) => {
        tracing::info_span!("geocomply.oracle", timeout_ms = $timeout_ms)
    };
}

/// Create an ambiguity assessment span.
#[macro_export]
macro_rules! ambiguity_span {
    ($entity_count:expr) => {
        tracing::debug_span!("geocomply.ambiguity", entity_count = $entity_count)
    };
}

/// Create a fusion span.
#[macro_export]
macro_rules! fusion_span {
    ($primary:expr, $secondary:expr) => {
        tracing::debug_span!("geocomply.fusion", primary = $primary, secondary = $secondary)
    };
}

/// Create an escalation span.
#[macro_export]
macro_rules! escalation_span {
    ($confidence:expr) => {
        tracing::debug_span!("geocomply.escalation", confidence = $confidence)
    };
}

/// Create a feedback span.
#[macro_export]
macro_rules! feedback_span {
    ($entity_type:expr) => {
        tracing::info_span!("geocomply.feedback", entity_type = %$entity_type)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CLASSIFICATION: &str = "geocomply.classification";
    pub const EXTRACTION: &str = "geocomply.extraction";
    pub const ORACLE: &str = "geocomply.oracle";
    pub const AMBIGUITY: &str = "geocomply.ambiguity";
    pub const FUSION: &str = "geocomply.fusion";
    pub const ESCALATION: &str = "geocomply.escalation";
    pub const FEEDBACK: &str = "geocomply.feedback";
}
