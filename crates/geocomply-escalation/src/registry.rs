//! Hot-reloadable threshold table.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use geocomply_core::config::{validate_thresholds, ThresholdConfig};
use geocomply_core::errors::ConfigError;
use geocomply_core::models::{CategoryThreshold, ComplianceCategory};
use tracing::{info, warn};

/// A validated, immutable set of category thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    default_category: ComplianceCategory,
    entries: BTreeMap<ComplianceCategory, CategoryThreshold>,
}

impl ThresholdTable {
    pub fn from_config(config: &ThresholdConfig) -> Result<Self, ConfigError> {
        validate_thresholds(config)?;
        Ok(Self {
            default_category: config.default_category,
            entries: config
                .categories
                .iter()
                .map(|t| (t.category, t.clone()))
                .collect(),
        })
    }

    pub fn get(&self, category: ComplianceCategory) -> Option<&CategoryThreshold> {
        self.entries.get(&category)
    }

    pub fn default_category(&self) -> ComplianceCategory {
        self.default_category
    }

    /// Entry of the default category. Present by construction.
    pub fn default_entry(&self) -> Option<&CategoryThreshold> {
        self.entries.get(&self.default_category)
    }

    /// Entries in category order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryThreshold> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_config(&self) -> ThresholdConfig {
        ThresholdConfig {
            default_category: self.default_category,
            categories: self.entries.values().cloned().collect(),
        }
    }
}

/// Holds the current [`ThresholdTable`] and swaps it atomically on reload.
///
/// Readers take a cheap `Arc` snapshot and keep a consistent view for the
/// rest of their request even if a reload lands meanwhile.
#[derive(Debug)]
pub struct ThresholdRegistry {
    current: RwLock<Arc<ThresholdTable>>,
}

impl ThresholdRegistry {
    pub fn new(table: ThresholdTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    pub fn from_config(config: &ThresholdConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(ThresholdTable::from_config(config)?))
    }

    pub fn snapshot(&self) -> Arc<ThresholdTable> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Validate `config` and make it the current table.
    ///
    /// On error the previous table stays in place.
    pub fn reload(&self, config: &ThresholdConfig) -> Result<(), ConfigError> {
        let table = match ThresholdTable::from_config(config) {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %e, "threshold reload rejected");
                return Err(e);
            }
        };
        let entries = table.len();
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(table);
        info!(entries, "threshold table reloaded");
        Ok(())
    }
}

impl Default for ThresholdRegistry {
    fn default() -> Self {
        let config = ThresholdConfig::default();
        Self::new(ThresholdTable {
            default_category: config.default_category,
            entries: config
                .categories
                .into_iter()
                .map(|t| (t.category, t))
                .collect(),
        })
    }
}
