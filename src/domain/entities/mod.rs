//! Core domain entities representing the key → URL data model.
//!
//! Entities are plain data structures; persistence lives behind
//! [`crate::domain::repositories::MappingRepository`].
//!
//! # Entity Types
//!
//! - [`Entry`] - A single short key and its target URL
//! - [`Mapping`] - The whole table, the unit of load and save

pub mod entry;
pub mod mapping;

pub use entry::Entry;
pub use mapping::Mapping;
