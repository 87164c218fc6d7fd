//! # linkmap
//!
//! A tiny URL shortener: a key → URL table kept in a YAML file, served as
//! HTTP redirects or edited from the command line.
//!
//! ## Architecture
//!
//! The crate keeps the usual layer separation, scaled down:
//!
//! - **Domain Layer** ([`domain`]) - Mapping entities, repository trait, redirect resolution
//! - **Application Layer** ([`application`]) - Load / mutate / save orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - YAML file repository
//! - **API Layer** ([`api`]) - Redirect handlers and HTTP tracing
//! - **CLI** ([`cli`], [`commands`]) - Argument parsing and action dispatch
//!
//! ## Quick Start
//!
//! ```bash
//! echo "dogs: www.dogs.com" > config.yml
//!
//! cargo run -- configure -a cats -u www.cats.com
//! cargo run -- -l
//! cargo run -- run -p 8080
//!
//! curl -i localhost:8080/dogs   # 307, Location: www.dogs.com
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::MappingError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::MappingService;
    pub use crate::domain::entities::{Entry, Mapping};
    pub use crate::domain::redirect::{RedirectResult, resolve};
    pub use crate::domain::repositories::MappingRepository;
    pub use crate::error::MappingError;
    pub use crate::infrastructure::persistence::YamlMappingRepository;
    pub use crate::state::AppState;
}
