//! Alertsync CLI
//!
//! Resolves alert action definitions to canonical actions and back, and
//! rehearses applying them against an in-memory action store.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::CliConfig;
pub use crate::config::OutputFormat;

/// Alertsync CLI: resolve and apply alert action definitions.
#[derive(Parser, Debug)]
#[command(name = "alertsync", version, about)]
struct Cli {
    /// Configuration file. Defaults to `alertsync.toml` when present.
    #[arg(long, env = "ALERTSYNC_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Repository for definitions that do not name one.
    #[arg(long, env = "ALERTSYNC_REPOSITORY", global = true)]
    repository: Option<String>,

    /// Output format.
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a definition file into a canonical action.
    Decode(commands::decode::DecodeArgs),
    /// Encode a canonical JSON action into a definition document.
    Encode(commands::encode::EncodeArgs),
    /// Build or split composite action ids.
    Id(commands::id::IdArgs),
    /// Create definitions against an in-memory store.
    Apply(commands::apply::ApplyArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(repository) = &cli.repository {
        config = config.with_repository(repository);
    }
    if let Some(format) = cli.format {
        config = config.with_output(format);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Decode(args) => commands::decode::run(&args, config.output),
        Command::Encode(args) => commands::encode::run(&args, &config),
        Command::Id(args) => commands::id::run(&args, config.output),
        Command::Apply(args) => commands::apply::run(&args, &config).await,
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "alertsync",
            "id",
            "parse",
            "sandbox+hook",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Command::Id(_)));
    }

    #[test]
    fn repository_flag_reads_environment() {
        let command = Cli::command();
        let repository = command
            .get_arguments()
            .find(|arg| arg.get_id() == "repository")
            .unwrap();
        assert_eq!(
            repository.get_env().and_then(|v| v.to_str()),
            Some("ALERTSYNC_REPOSITORY")
        );
    }

    #[test]
    fn apply_requires_files() {
        assert!(Cli::try_parse_from(["alertsync", "apply"]).is_err());
    }
}
