//! Router configuration.
//!
//! # Route Structure
//!
//! - `ANY /{*key}` - Short key redirect
//! - fallback      - Everything the wildcard misses (the bare `/`), resolved the same way
//!
//! There are no other routes: every path is a candidate key.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::{fallback_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::any;

/// Constructs the redirect router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/{*key}", any(redirect_handler))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}
