//! Mapping entity: the full set of entries, the unit of load and save.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Entry;

/// The key → URL table.
///
/// Keys are unique and the last write wins. Entries are kept ordered by key so
/// listings and the saved file come out the same on every run; callers must
/// not rely on that order for anything else.
///
/// Serializes as a flat map, e.g.:
///
/// ```yaml
/// cats: www.cats.com
/// dogs: www.dogs.com
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: BTreeMap<String, String>,
}

impl Mapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the target stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts or overwrites the entry for `key`.
    ///
    /// No validation is performed on either side. Returns the previous target
    /// when the key was already present.
    pub fn set(&mut self, key: impl Into<String>, target: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), target.into())
    }

    /// Removes the entry for `key`, returning its target.
    ///
    /// Removing an absent key is a no-op and returns `None`.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Returns every entry for display.
    pub fn list(&self) -> Vec<Entry> {
        self.entries
            .iter()
            .map(|(key, target)| Entry::new(key.as_str(), target.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
