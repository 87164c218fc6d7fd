//! Application layer services.
//!
//! Services consume repository traits and give the command layer a small API
//! for loading, editing and listing the mapping.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - Load, add, delete and list entries

pub mod services;
