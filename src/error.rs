//! Error types for the mapping store.
//!
//! A lookup miss while serving redirects is not an error; it is
//! [`crate::domain::redirect::RedirectResult::NotFound`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    /// The mapping file is missing, unreadable, or unwritable.
    #[error("failed to {action} mapping file {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a flat `key: value` map of strings.
    #[error("mapping file {} is not a valid key-value map", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl MappingError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn format(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Format {
            path: path.into(),
            source,
        }
    }
}
