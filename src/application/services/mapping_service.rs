//! Mapping load, mutation and listing service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{Entry, Mapping};
use crate::domain::repositories::MappingRepository;
use crate::error::MappingError;

/// Service for reading and editing the key → URL mapping.
///
/// The caller owns the in-memory [`Mapping`]; every successful mutation is
/// written back through the repository immediately as a whole.
pub struct MappingService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> MappingService<R> {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Loads the mapping from the repository.
    ///
    /// # Errors
    ///
    /// Propagates [`MappingError::Io`] and [`MappingError::Format`] unchanged.
    pub async fn load(&self) -> Result<Mapping, MappingError> {
        let mapping = self.repository.load().await?;
        info!(entries = mapping.len(), "Mapping loaded");
        Ok(mapping)
    }

    /// Adds or overwrites the entry for `key` and persists the mapping.
    ///
    /// Returns the previous target if the key already existed.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Io`] if the mapping cannot be written.
    pub async fn add_entry(
        &self,
        mapping: &mut Mapping,
        key: String,
        target: String,
    ) -> Result<Option<String>, MappingError> {
        let previous = mapping.set(key.as_str(), target.as_str());
        self.repository.save(mapping).await?;

        match &previous {
            Some(old) => info!(%key, %old, new = %target, "Entry overwritten"),
            None => info!(%key, %target, "Entry added"),
        }

        Ok(previous)
    }

    /// Deletes the entry for `key` and persists the mapping.
    ///
    /// Returns `Ok(false)` without touching storage when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Io`] if the mapping cannot be written.
    pub async fn delete_entry(
        &self,
        mapping: &mut Mapping,
        key: &str,
    ) -> Result<bool, MappingError> {
        let Some(target) = mapping.remove(key) else {
            warn!(%key, "No entry for key, nothing to delete");
            return Ok(false);
        };

        self.repository.save(mapping).await?;
        info!(%key, %target, "Entry deleted");

        Ok(true)
    }

    /// Returns all entries for display.
    pub fn list_entries(&self, mapping: &Mapping) -> Vec<Entry> {
        mapping.list()
    }
}
