//! Command-line interface.
//!
//! `argv` is parsed once into a [`Cli`] and then folded into a single
//! [`Action`], which [`crate::commands::execute`] dispatches.
//!
//! # Usage
//!
//! ```bash
//! # Serve redirects on port 8080
//! linkmap run -p 8080
//!
//! # Add or overwrite an entry
//! linkmap configure -a dogs -u www.dogs.com
//!
//! # Delete an entry
//! linkmap -d dogs
//!
//! # List entries
//! linkmap -l
//!
//! # Use another mapping file
//! linkmap --file /etc/linkmap/config.yml -l
//! ```

use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;

/// File-backed URL shortener.
#[derive(Debug, Parser)]
#[command(name = "linkmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the YAML mapping file (overrides MAPPING_FILE)
    #[arg(short = 'f', long = "file", value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// List the URL mapping
    #[arg(short = 'l', long = "list", conflicts_with = "delete")]
    pub list: bool,

    /// Delete the entry for KEY
    #[arg(
        short = 'd',
        long = "delete",
        value_name = "KEY",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub delete: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the redirect server
    Run {
        /// Port of the server
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Add or overwrite a mapping entry
    Configure {
        /// Short key (e.g., "dogs")
        #[arg(
            short = 'a',
            long = "add",
            value_name = "KEY",
            value_parser = NonEmptyStringValueParser::new()
        )]
        key: String,

        /// Target URL (e.g., "www.dogs.com")
        #[arg(
            short = 'u',
            long = "url",
            value_name = "URL",
            value_parser = NonEmptyStringValueParser::new()
        )]
        url: String,
    },
}

/// The one thing a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    RunServer { port: u16 },
    AddEntry { key: String, url: String },
    DeleteEntry { key: String },
    ListEntries,
    ShowHelp,
}

impl Cli {
    /// Folds the parsed arguments into a single [`Action`].
    ///
    /// # Errors
    ///
    /// Returns a clap [`ErrorKind::ArgumentConflict`] error when `--list` or
    /// `--delete` is combined with a subcommand.
    pub fn into_action(self) -> Result<Action, clap::Error> {
        match (self.command, self.list, self.delete) {
            (Some(_), true, _) | (Some(_), _, Some(_)) => Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--list and --delete cannot be combined with a subcommand",
            )),
            (Some(Commands::Run { port }), _, _) => Ok(Action::RunServer { port }),
            (Some(Commands::Configure { key, url }), _, _) => Ok(Action::AddEntry { key, url }),
            (None, _, Some(key)) => Ok(Action::DeleteEntry { key }),
            (None, true, None) => Ok(Action::ListEntries),
            (None, false, None) => Ok(Action::ShowHelp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Action, clap::Error> {
        Cli::try_parse_from(std::iter::once("linkmap").chain(args.iter().copied()))?.into_action()
    }

    #[test]
    fn test_run_default_port() {
        assert_eq!(
            parse(&["run"]).unwrap(),
            Action::RunServer { port: DEFAULT_PORT }
        );
    }

    #[test]
    fn test_run_custom_port() {
        assert_eq!(
            parse(&["run", "-p", "9000"]).unwrap(),
            Action::RunServer { port: 9000 }
        );
        assert_eq!(
            parse(&["run", "--port", "3000"]).unwrap(),
            Action::RunServer { port: 3000 }
        );
    }

    #[test]
    fn test_run_rejects_invalid_port() {
        assert!(parse(&["run", "-p", "70000"]).is_err());
        assert!(parse(&["run", "-p", "http"]).is_err());
    }

    #[test]
    fn test_configure_add() {
        assert_eq!(
            parse(&["configure", "-a", "dogs", "-u", "www.dogs.com"]).unwrap(),
            Action::AddEntry {
                key: "dogs".to_string(),
                url: "www.dogs.com".to_string()
            }
        );
    }

    #[test]
    fn test_configure_requires_both_key_and_url() {
        assert!(parse(&["configure", "-a", "dogs"]).is_err());
        assert!(parse(&["configure", "-u", "www.dogs.com"]).is_err());
    }

    #[test]
    fn test_configure_rejects_empty_values() {
        let err = parse(&["configure", "-a", "", "-u", "www.dogs.com"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        assert!(parse(&["configure", "-a", "dogs", "-u", ""]).is_err());
        assert!(parse(&["-d", ""]).is_err());
    }

    #[test]
    fn test_delete() {
        assert_eq!(
            parse(&["-d", "dogs"]).unwrap(),
            Action::DeleteEntry {
                key: "dogs".to_string()
            }
        );
    }

    #[test]
    fn test_list() {
        assert_eq!(parse(&["-l"]).unwrap(), Action::ListEntries);
        assert_eq!(parse(&["--list"]).unwrap(), Action::ListEntries);
    }

    #[test]
    fn test_no_arguments_shows_help() {
        assert_eq!(parse(&[]).unwrap(), Action::ShowHelp);
    }

    #[test]
    fn test_help_flag() {
        let err = parse(&["-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_list_conflicts_with_delete() {
        let err = parse(&["-l", "-d", "dogs"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_flags_conflict_with_subcommand() {
        let err = parse(&["-l", "run"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_file_flag_is_global() {
        let cli = Cli::try_parse_from(["linkmap", "run", "--file", "links.yml"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("links.yml")));

        let cli = Cli::try_parse_from(["linkmap", "-f", "links.yml", "-l"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("links.yml")));
        assert!(cli.list);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
