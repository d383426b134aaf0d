use super::error_code::{self, GeoComplyErrorCode};

/// Entity extraction errors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("invalid pattern: {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("extractor failed: {reason}")]
    Failed { reason: String },
}

impl GeoComplyErrorCode for ExtractionError {
    fn error_code(&self) -> &'static str {
        error_code::EXTRACTION_ERROR
    }
}
