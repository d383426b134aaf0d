use super::error_code::{self, GeoComplyErrorCode};

/// Failures of the external reasoning oracle or the regulatory-context provider.
///
/// Every variant routes the request to the fail-safe result.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("oracle unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("oracle timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("oracle call cancelled")]
    Cancelled,

    #[error("malformed oracle response: {reason}")]
    Malformed { reason: String },
}

impl GeoComplyErrorCode for OracleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::ORACLE_UNAVAILABLE,
            Self::Timeout { .. } => error_code::ORACLE_TIMEOUT,
            Self::Cancelled => error_code::CANCELLED,
            Self::Malformed { .. } => error_code::ORACLE_MALFORMED,
        }
    }
}
