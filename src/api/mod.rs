//! HTTP layer translating requests into redirect lookups.
//!
//! # Modules
//!
//! - [`handlers`] - Redirect handlers
//! - [`middleware`] - Request tracing

pub mod handlers;
pub mod middleware;
