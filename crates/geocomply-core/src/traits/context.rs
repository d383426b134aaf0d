use crate::errors::OracleError;

/// Retrieval of regulatory context passed to the oracle.
#[allow(async_fn_in_trait)]
pub trait IRegulatoryContextProvider: Send + Sync {
    async fn context_for(&self, title: &str, description: &str) -> Result<String, OracleError>;
}

/// Provider that supplies no context.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegulatoryContext;

impl IRegulatoryContextProvider for NoRegulatoryContext {
    async fn context_for(&self, _title: &str, _description: &str) -> Result<String, OracleError> {
        Ok(String::new())
    }
}
