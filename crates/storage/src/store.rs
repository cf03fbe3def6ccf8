//! The in-memory JSON-backed store.
//!
//! Two id-keyed maps, loaded from (and serializable back to) a single
//! JSON document. The store is explicitly constructed and injected into
//! the repositories by the composition root; there is no module-level
//! singleton. `BTreeMap` keys give `list` a deterministic iteration
//! order without an extra sort.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::record::{CategoryRecord, RiskRecord};

/// Errors around loading and saving the store document itself. Domain
/// lookups never use this; they fail with `Fault`s.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read store file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse store JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonStore {
    #[serde(default)]
    pub category: BTreeMap<String, CategoryRecord>,
    #[serde(default)]
    pub risk: BTreeMap<String, RiskRecord>,
}

impl JsonStore {
    pub fn new() -> Self {
        JsonStore::default()
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        JsonStore::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with_category(mut self, id: impl Into<String>, record: CategoryRecord) -> Self {
        self.category.insert(id.into(), record);
        self
    }

    pub fn with_risk(mut self, id: impl Into<String>, record: RiskRecord) -> Self {
        self.risk.insert(id.into(), record);
        self
    }
}

/// The handle repositories hold: shared, locked per call.
pub type SharedStore = Arc<RwLock<JsonStore>>;

pub fn shared(store: JsonStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_parses_to_empty_store() {
        let store = JsonStore::from_json("{}").unwrap();
        assert!(store.category.is_empty());
        assert!(store.risk.is_empty());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = JsonStore::from_json("{not json").unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }
}
