use super::error_code::{self, GeoComplyErrorCode};

/// Glossary (entity standardizer) errors.
#[derive(Debug, thiserror::Error)]
pub enum GlossaryError {
    #[error("no canonical {entity_type} record named {name}")]
    UnknownCanonical { entity_type: String, name: String },

    #[error("invalid feedback correction: {reason}")]
    InvalidCorrection { reason: String },

    #[error("invalid glossary version: {version}")]
    InvalidVersion { version: String },

    #[error("malformed glossary data: {reason}")]
    Malformed { reason: String },

    #[error("glossary io failed: {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("glossary lock poisoned")]
    LockPoisoned,
}

impl GeoComplyErrorCode for GlossaryError {
    fn error_code(&self) -> &'static str {
        error_code::GLOSSARY_ERROR
    }
}
