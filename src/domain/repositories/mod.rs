//! Repository interfaces for data access.
//!
//! Implementations live in [`crate::infrastructure::persistence`].

pub mod mapping_repository;

pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
