use crate::errors::OracleError;
use crate::models::{OracleAssessment, OracleRequest};

/// External reasoning oracle producing the primary classification signal.
///
/// Implementations may suspend; callers bound every call with a timeout.
#[allow(async_fn_in_trait)]
pub trait IRegulatoryOracle: Send + Sync {
    async fn assess(&self, request: &OracleRequest) -> Result<OracleAssessment, OracleError>;
}
