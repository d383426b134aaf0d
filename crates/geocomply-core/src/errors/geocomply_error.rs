use super::error_code::{self, GeoComplyErrorCode};
use super::{ConfigError, ExtractionError, GlossaryError, OracleError};

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum GeoComplyError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("glossary error: {0}")]
    Glossary(#[from] GlossaryError),

    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GeoComplyErrorCode for GeoComplyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Glossary(e) => e.error_code(),
            Self::Oracle(e) => e.error_code(),
            Self::Extraction(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

pub type GeoComplyResult<T> = Result<T, GeoComplyError>;
