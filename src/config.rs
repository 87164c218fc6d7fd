//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, before the command runs. A `.env`
//! file in the working directory is honoured (see `dotenvy::dotenv()` in
//! `main.rs`).
//!
//! ```bash
//! export MAPPING_FILE="/etc/linkmap/config.yml"
//! export LISTEN_HOST="127.0.0.1"
//! ```
//!
//! ## Optional Variables
//!
//! - `MAPPING_FILE` - Path of the YAML mapping file (default: `./config.yml`);
//!   the `--file` flag takes precedence
//! - `LISTEN_HOST` - Interface the server binds to (default: `0.0.0.0`); the
//!   port comes from `run --port`
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MAPPING_FILE: &str = "./config.yml";
pub const DEFAULT_LISTEN_HOST: &str = "0.0.0.0";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub mapping_path: PathBuf,
    pub listen_host: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mapping_path: PathBuf = env::var("MAPPING_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MAPPING_FILE.to_string())
            .into();
        let listen_host =
            env::var("LISTEN_HOST").unwrap_or_else(|_| DEFAULT_LISTEN_HOST.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            mapping_path,
            listen_host,
            log_level,
            log_format,
        }
    }

    /// Replaces the mapping file path when one is given on the command line.
    pub fn with_mapping_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.mapping_path = path;
        }
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `mapping_path` is empty
    /// - `listen_host` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.mapping_path.as_os_str().is_empty() {
            anyhow::bail!("MAPPING_FILE must not be empty");
        }

        if self.listen_host.trim().is_empty() {
            anyhow::bail!("LISTEN_HOST must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Mapping file: {}", self.mapping_path.display());
        tracing::info!("  Listen host: {}", self.listen_host);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads configuration from environment variables, applies the command-line
/// mapping file override, then validates the result.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(mapping_path: Option<PathBuf>) -> Result<Config> {
    let config = Config::from_env().with_mapping_path(mapping_path);
    config.validate()?;
    Ok(config)
}
