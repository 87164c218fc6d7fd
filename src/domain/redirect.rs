//! Redirect resolution: request path to target URL.

use crate::domain::entities::Mapping;

/// Outcome of resolving a request path against the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectResult {
    /// The key is known; redirect to the target.
    Found(String),
    /// The key is unknown.
    NotFound,
}

/// Resolves a request path to a redirect target.
///
/// The leading `/` is stripped to obtain the lookup key, so `/dogs` looks up
/// `dogs` and `/docs/intro` looks up `docs/intro`. Only one slash is removed.
pub fn resolve(mapping: &Mapping, path: &str) -> RedirectResult {
    let key = path.strip_prefix('/').unwrap_or(path);

    match mapping.get(key) {
        Some(target) => RedirectResult::Found(target.to_string()),
        None => RedirectResult::NotFound,
    }
}
