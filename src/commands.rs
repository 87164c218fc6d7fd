//! Dispatch of a parsed [`Action`].
//!
//! The mapping file is read once per invocation. `ShowHelp` never touches it;
//! every other action fails fast on a missing or malformed file.

use anyhow::Result;
use clap::CommandFactory;
use colored::*;
use std::sync::Arc;

use crate::application::services::MappingService;
use crate::cli::{Action, Cli};
use crate::config::Config;
use crate::domain::entities::Entry;
use crate::infrastructure::persistence::YamlMappingRepository;
use crate::server;

/// Runs `action` against the mapping file named in `config`.
///
/// # Errors
///
/// Returns an error if the mapping cannot be read, parsed or written, or if
/// the server fails to start.
pub async fn execute(action: Action, config: &Config) -> Result<()> {
    let service = MappingService::new(Arc::new(YamlMappingRepository::new(
        config.mapping_path.clone(),
    )));

    match action {
        Action::ShowHelp => show_help()?,
        Action::RunServer { port } => {
            let mapping = service.load().await?;
            server::run(config, mapping, port).await?;
        }
        Action::AddEntry { key, url } => {
            let mut mapping = service.load().await?;
            service.add_entry(&mut mapping, key, url).await?;
        }
        Action::DeleteEntry { key } => {
            let mut mapping = service.load().await?;
            service.delete_entry(&mut mapping, &key).await?;
        }
        Action::ListEntries => {
            let mapping = service.load().await?;
            for line in render_entries(&service.list_entries(&mapping)) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Prints the top-level help. Needs neither configuration nor the mapping file.
pub fn show_help() -> Result<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}

/// Formats entries as `key - target` lines.
fn render_entries(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| format!("{} - {}", entry.key.bold(), entry.target))
        .collect()
}
