mod context;
mod extractor;
mod oracle;

pub use context::{IRegulatoryContextProvider, NoRegulatoryContext};
pub use extractor::IEntityExtractor;
pub use oracle::IRegulatoryOracle;
