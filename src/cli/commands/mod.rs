//! CLI command implementations.

pub mod inject;
pub mod print;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::{DocsDirectory, GitHubClient, GitHubIssueSource};
use crate::domain::models::{Config, StatusRegistry};
use crate::services::{LinkResolver, RenderRequest, RenderedTable, TableRenderer};

/// Renderer backed by the GitHub search API and the local docs directory.
pub type LiveRenderer = TableRenderer<GitHubIssueSource, DocsDirectory>;

/// Wire up the live renderer from configuration.
pub fn build_renderer(config: &Config) -> Result<LiveRenderer> {
    let client = GitHubClient::from_config(&config.github).context("Failed to create GitHub client")?;
    let source = GitHubIssueSource::from_config(client, &config.github);
    let docs = DocsDirectory::new(&config.docs.dir);
    let links = LinkResolver::from_config(&config.github, &config.docs);

    Ok(TableRenderer::new(
        StatusRegistry::default(),
        links,
        Arc::new(source),
        Arc::new(docs),
    ))
}

/// Request from the repeatable `--status` flag. No flag means every status.
pub fn render_request(statuses: &[String]) -> RenderRequest {
    RenderRequest::with_statuses(statuses)
}

/// Log one summary line per rendered status group.
pub fn log_counts(table: &RenderedTable) {
    for (status, count) in table.counts() {
        tracing::info!(status, count, "rendered status group");
    }
}
