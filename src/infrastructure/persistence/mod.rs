//! File-backed repository implementations.
//!
//! # Repositories
//!
//! - [`YamlMappingRepository`] - Key → URL mapping stored as a flat YAML file

pub mod yaml_mapping_repository;

pub use yaml_mapping_repository::YamlMappingRepository;
