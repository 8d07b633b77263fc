//! Implementation of the `rfc-table print` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::{build_renderer, log_counts, render_request};
use crate::cli::output::progress::spinner_for;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::services::RenderedTable;

#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Only render this status; repeat to render several, in order
    #[arg(short = 's', long = "status", value_name = "STATUS")]
    pub statuses: Vec<String>,
}

/// Markdown rows for humans, grouped records for `--json`.
#[derive(Debug, Serialize)]
pub struct PrintOutput {
    #[serde(skip)]
    pub lines: Vec<String>,
    #[serde(flatten)]
    pub table: RenderedTable,
}

impl CommandOutput for PrintOutput {
    fn to_human(&self) -> String {
        self.lines.join("\n")
    }
}

pub async fn execute(args: PrintArgs, config: &Config, json_mode: bool) -> Result<()> {
    let request = render_request(&args.statuses);
    let renderer = build_renderer(config)?;

    let spinner = spinner_for(json_mode, format!("Fetching issues from {}", config.github.slug()));
    let collected = renderer.collect(&request).await;
    spinner.finish_and_clear();
    let table = collected.context("Failed to fetch issues")?;
    log_counts(&table);

    let result = PrintOutput {
        lines: renderer.format_lines(&table),
        table,
    };
    output(&result, json_mode);
    Ok(())
}
