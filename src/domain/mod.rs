//! Domain layer containing the mapping model and redirect resolution.
//!
//! Nothing in here knows about files or HTTP.
//!
//! # Architecture
//!
//! - [`entities`] - [`entities::Entry`] and [`entities::Mapping`]
//! - [`repositories`] - Persistence trait definitions
//! - [`redirect`] - Pure path → target resolution used by the HTTP handlers
//!
//! # Request Flow
//!
//! 1. The mapping is loaded once via [`repositories::MappingRepository`]
//! 2. It is frozen into [`crate::state::AppState`] for the server lifetime
//! 3. Each request path goes through [`redirect::resolve`]
//! 4. [`crate::api::handlers`] turns the outcome into a 307 or a 404

pub mod entities;
pub mod redirect;
pub mod repositories;
