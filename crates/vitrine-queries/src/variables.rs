//! Flat variable maps for query execution.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Variables passed alongside a query template.
///
/// Values are flat scalars (strings, numbers, booleans). The map is ordered
/// so serialized request bodies are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryVariables(BTreeMap<String, Value>);

impl QueryVariables {
    /// Create an empty variable map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any existing value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set a variable only if it is not already present.
    ///
    /// Used for localization injection: `country`/`language` are added to
    /// every query unless the caller overrode them explicitly.
    pub fn ensure(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.entry(key.into()).or_insert_with(|| value.into());
        self
    }

    /// Look up a variable by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Check whether a variable is set.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of variables set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
