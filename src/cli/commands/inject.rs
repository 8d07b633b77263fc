//! Implementation of the `rfc-table inject` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use super::{build_renderer, log_counts, render_request};
use crate::cli::output::progress::spinner_for;
use crate::cli::output::{output, CommandOutput, StatusCount};
use crate::domain::models::Config;
use crate::services::HostDocument;

#[derive(Args, Debug)]
pub struct InjectArgs {
    /// Document holding the table markers
    #[arg(default_value = "README.md")]
    pub readme: PathBuf,

    /// Only render this status; repeat to render several, in order
    #[arg(short = 's', long = "status", value_name = "STATUS")]
    pub statuses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct InjectOutput {
    pub success: bool,
    pub path: PathBuf,
    pub rows: usize,
    pub changed: bool,
    pub groups: Vec<StatusCount>,
}

impl CommandOutput for InjectOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Wrote {} issue(s) to {}{}",
            self.rows,
            self.path.display(),
            if self.changed { "" } else { " (unchanged)" }
        )];
        for group in &self.groups {
            lines.push(format!("  {}: {}", group.status, group.issues));
        }
        lines.join("\n")
    }
}

pub async fn execute(args: InjectArgs, config: &Config, json_mode: bool) -> Result<()> {
    let request = render_request(&args.statuses);
    tracing::info!(
        path = %args.readme.display(),
        statuses = ?request.statuses,
        "injecting table"
    );

    // Fail on a bad target before any network traffic.
    let document = HostDocument::load(&args.readme).await?;
    let renderer = build_renderer(config)?;

    let spinner = spinner_for(json_mode, format!("Fetching issues from {}", config.github.slug()));
    let collected = renderer.collect(&request).await;
    spinner.finish_and_clear();
    let table = collected.context("Failed to fetch issues")?;
    log_counts(&table);

    let rows = renderer.format_lines(&table);
    let changed = document.write(&rows).await?;
    tracing::info!(rows = table.len(), changed, "table written");

    let result = InjectOutput {
        success: true,
        path: document.path().to_path_buf(),
        rows: table.len(),
        changed,
        groups: StatusCount::from_counts(table.counts()),
    };
    output(&result, json_mode);
    Ok(())
}
