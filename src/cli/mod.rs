//! Command-line interface for rfc-table.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::infrastructure::config::{ConfigLoader, ConfigOverrides};
use crate::infrastructure::logging::LoggerImpl;
use commands::{inject::InjectArgs, print::PrintArgs};

const USAGE_HINT: &str =
    "rfc-table inject README.md [--status <STATUS_1>] [--status <STATUS_2>] [...]";

#[derive(Parser, Debug)]
#[command(name = "rfc-table")]
#[command(about = "Render the RFC status table from GitHub issues", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./rfc-table.yaml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Repository to read issues from, as OWNER/NAME
    #[arg(long, global = true, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Local directory holding the numbered documents
    #[arg(long, global = true, value_name = "DIR")]
    pub docs_dir: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Config values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            repo: self.repo.clone(),
            docs_dir: self.docs_dir.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the table and write it between the markers of a document
    Inject(InjectArgs),

    /// Render the table and print the rows to stdout
    Print(PrintArgs),
}

/// Load config, start logging and run the selected command.
pub async fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::load(cli.config.as_deref(), &cli.overrides())?;
    LoggerImpl::init(&config.logging)?;

    match cli.command {
        Commands::Inject(args) => commands::inject::execute(args, &config, cli.json).await,
        Commands::Print(args) => commands::print::execute(args, &config, cli.json).await,
    }
}

/// Report a failed run on stderr and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let report = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        eprintln!("{report}");
    } else {
        eprintln!();
        eprintln!("Error: {err:?}");
        eprintln!();
        eprintln!("Usage:");
        eprintln!("\t{USAGE_HINT}");
    }
    std::process::exit(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_from_globals() {
        let cli = Cli::try_parse_from([
            "rfc-table",
            "print",
            "--repo",
            "acme/rfcs",
            "--docs-dir",
            "docs",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(
            cli.overrides(),
            ConfigOverrides {
                repo: Some("acme/rfcs".to_string()),
                docs_dir: Some("docs".to_string()),
                log_level: Some("debug".to_string()),
            }
        );
    }
}
