//! Infrastructure layer for external integrations.
//!
//! Provides concrete implementations of the interfaces defined by the domain
//! layer.
//!
//! # Modules
//!
//! - [`persistence`] - YAML file repository

pub mod persistence;
