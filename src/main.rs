use anyhow::Result;
use clap::Parser;
use linkmap::cli::{Action, Cli};
use linkmap::commands;
use linkmap::config::{self, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mapping_path = cli.file.clone();
    let action = cli.into_action().unwrap_or_else(|e| e.exit());

    if action == Action::ShowHelp {
        return commands::show_help();
    }

    let config = config::load(mapping_path)?;
    init_tracing(&config);

    commands::execute(action, &config).await
}

/// Logs go to stderr so `--list` output on stdout stays clean.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
