//! Shared state injected into HTTP handlers.

use std::sync::Arc;

use crate::domain::entities::Mapping;

/// Read-only state for the redirect server.
///
/// The mapping is frozen for the lifetime of the server; changes made through
/// the CLI are picked up only after a restart.
#[derive(Clone)]
pub struct AppState {
    pub mapping: Arc<Mapping>,
}

impl AppState {
    pub fn new(mapping: Mapping) -> Self {
        Self {
            mapping: Arc::new(mapping),
        }
    }
}
