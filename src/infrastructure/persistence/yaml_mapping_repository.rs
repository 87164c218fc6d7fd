//! YAML file implementation of the mapping repository.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::MappingError;

/// Stores the mapping as a flat YAML document in a single file.
///
/// ```yaml
/// dogs: www.dogs.com
/// cats: www.cats.com
/// ```
///
/// Saves rewrite the whole file: the new content goes to a sibling
/// `<file>.tmp` which is then renamed over the original. There is no locking;
/// concurrent writers race and the last rename wins.
pub struct YamlMappingRepository {
    path: PathBuf,
}

impl YamlMappingRepository {
    /// Creates a repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("mapping"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl MappingRepository for YamlMappingRepository {
    async fn load(&self) -> Result<Mapping, MappingError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| MappingError::io("read", &self.path, e))?;

        let mapping = parse_mapping(&self.path, &content)?;
        debug!(path = %self.path.display(), entries = mapping.len(), "Mapping file read");

        Ok(mapping)
    }

    async fn save(&self, mapping: &Mapping) -> Result<(), MappingError> {
        let content =
            serde_yaml::to_string(mapping).map_err(|e| MappingError::format(&self.path, e))?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, content)
            .await
            .map_err(|e| MappingError::io("write", &temp_path, e))?;

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(MappingError::io("replace", &self.path, e));
        }

        debug!(path = %self.path.display(), entries = mapping.len(), "Mapping file written");
        Ok(())
    }
}

/// Parses file content into a mapping.
///
/// Blank or comment-only content and a YAML null document (`~`, `null`) all
/// yield an empty mapping.
fn parse_mapping(path: &Path, content: &str) -> Result<Mapping, MappingError> {
    if is_blank_document(content) {
        return Ok(Mapping::new());
    }

    let parsed: Option<Mapping> =
        serde_yaml::from_str(content).map_err(|e| MappingError::format(path, e))?;

    Ok(parsed.unwrap_or_default())
}

fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}
