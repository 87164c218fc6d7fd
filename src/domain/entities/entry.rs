//! Entry entity representing a single short key to URL pair.

/// One `key → target` pair of the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub target: String,
}

impl Entry {
    /// Creates a new Entry instance.
    pub fn new(key: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: target.into(),
        }
    }
}
