//! Repository trait for mapping persistence.

use crate::domain::entities::Mapping;
use crate::error::MappingError;
use async_trait::async_trait;

/// Storage interface for the key → URL mapping.
///
/// The whole mapping is read and written as one unit; there are no
/// incremental updates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::YamlMappingRepository`] - YAML file implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Loads the full mapping.
    ///
    /// An empty store yields an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Io`] if the store is missing or unreadable.
    /// Returns [`MappingError::Format`] if its content cannot be parsed.
    async fn load(&self) -> Result<Mapping, MappingError>;

    /// Replaces the stored mapping with `mapping`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Io`] on write failure.
    async fn save(&self, mapping: &Mapping) -> Result<(), MappingError>;
}
