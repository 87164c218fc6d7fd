//! HTTP server initialization and runtime setup.
//!
//! Binds the listener, freezes the mapping into shared state and runs the
//! Axum server until Ctrl-C.

use crate::config::Config;
use crate::domain::entities::Mapping;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};

/// Runs the redirect server on `config.listen_host` and `port`.
///
/// The mapping is moved into [`AppState`] and never reloaded; restart the
/// server to pick up edits made through the CLI.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: &Config, mapping: Mapping, port: u16) -> Result<()> {
    config.print_summary();

    let entries = mapping.len();
    let app = app_router(AppState::new(mapping));

    let listener = tokio::net::TcpListener::bind((config.listen_host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.listen_host, port))?;
    let addr = listener.local_addr()?;
    tracing::info!("Starting server on http://{addr} with {entries} entries");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
