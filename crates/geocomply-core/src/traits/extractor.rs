use crate::errors::ExtractionError;
use crate::models::ExtractionResult;

/// Upstream entity extraction.
pub trait IEntityExtractor: Send + Sync {
    /// Extract entities and, where the text is unambiguous, a clear-cut verdict.
    fn extract(&self, title: &str, description: &str) -> Result<ExtractionResult, ExtractionError>;

    /// Called after glossary feedback added an alias. Extractors that derive
    /// state from the glossary rebuild it here.
    fn on_glossary_updated(&self) -> Result<(), ExtractionError> {
        Ok(())
    }
}
