//! Handlers for short key redirects.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::domain::redirect::{RedirectResult, resolve};
use crate::state::AppState;

/// Redirects a short key to its target URL.
///
/// # Endpoint
///
/// `ANY /{*key}`
///
/// The key is percent-decoded by the extractor and may contain slashes, so
/// `/docs/intro` looks up `docs/intro` and `/my%20dogs` looks up `my dogs`.
///
/// # Responses
///
/// - **307 Temporary Redirect** with `Location: <target>` when the key exists
/// - **404 Not Found** with a plain-text `Not Found` body otherwise, including
///   paths that do not percent-decode to UTF-8 (no stored key can match them)
pub async fn redirect_handler(
    State(state): State<AppState>,
    key: Result<Path<String>, PathRejection>,
) -> Response {
    let Path(key) = match key {
        Ok(key) => key,
        Err(rejection) => {
            debug!("Redirect MISS for undecodable path: {}", rejection.body_text());
            return RedirectResult::NotFound.into_response();
        }
    };

    let outcome = resolve(&state.mapping, &format!("/{key}"));
    log_outcome(&key, &outcome);
    outcome.into_response()
}

/// Resolves requests the wildcard route does not match, i.e. the bare `/`.
pub async fn fallback_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let outcome = resolve(&state.mapping, uri.path());
    log_outcome(uri.path(), &outcome);
    outcome.into_response()
}

fn log_outcome(key: &str, outcome: &RedirectResult) {
    match outcome {
        RedirectResult::Found(target) => debug!("Redirect HIT for {} -> {}", key, target),
        RedirectResult::NotFound => debug!("Redirect MISS for {}", key),
    }
}

impl IntoResponse for RedirectResult {
    fn into_response(self) -> Response {
        match self {
            RedirectResult::Found(target) => match HeaderValue::try_from(target.as_str()) {
                Ok(location) => {
                    (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response()
                }
                Err(e) => {
                    error!("Target {:?} is not a valid Location header: {}", target, e);
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            },
            RedirectResult::NotFound => {
                let reason = StatusCode::NOT_FOUND
                    .canonical_reason()
                    .unwrap_or("Not Found");
                (StatusCode::NOT_FOUND, reason).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_into_response() {
        let response = RedirectResult::Found("www.dogs.com".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "www.dogs.com");
    }

    #[test]
    fn test_not_found_into_response() {
        let response = RedirectResult::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::LOCATION).is_none());
    }

    #[test]
    fn test_invalid_target_is_server_error() {
        let response = RedirectResult::Found("bad\ntarget".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
