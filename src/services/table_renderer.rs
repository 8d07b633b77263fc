//! Markdown status table rendering.
//!
//! Pulls issues from an [`IssueSource`], classifies and links each one,
//! then groups them by status and formats one pipe-delimited row per issue.

use std::collections::HashMap;
use std::sync::Arc;

use futures::TryStreamExt;
use serde::Serialize;

use crate::domain::errors::DomainResult;
use crate::domain::models::{
    normalize_handle, normalize_status, ExtractedMetadata, IssueRecord, RawIssue, StatusRegistry,
    UNKNOWN_STATUS,
};
use crate::domain::ports::{DocListing, IssueQuery, IssueSource};

use super::doc_matcher::find_doc_file;
use super::link_resolver::LinkResolver;

/// First line of every rendered table. The `#` is escaped for Markdown.
pub const TABLE_HEADER: &str = "\\#|Title|Owner|Status";

/// Header/body separator line.
pub const TABLE_SEPARATOR: &str = "---|-----|-----|------";

/// Which statuses to render, and in what order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequest {
    /// Ordered status labels. `None` renders every status in registry order.
    pub statuses: Option<Vec<String>>,
}

impl RenderRequest {
    /// Render every status.
    pub fn all() -> Self {
        Self::default()
    }

    /// Render only the given statuses, in the given order.
    ///
    /// Values are normalized with [`normalize_status`]; repeats are dropped.
    /// An empty list renders every status.
    pub fn with_statuses<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for status in statuses {
            let status = normalize_status(status.as_ref());
            if !ordered.contains(&status) {
                ordered.push(status);
            }
        }
        Self {
            statuses: (!ordered.is_empty()).then_some(ordered),
        }
    }

    fn includes(&self, status: &str) -> bool {
        self.statuses
            .as_ref()
            .is_none_or(|wanted| wanted.iter().any(|s| s == status))
    }
}

/// Records sharing one status, sorted by issue number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusGroup {
    pub status: String,
    pub display: String,
    pub issues: Vec<IssueRecord>,
}

/// Grouped records in rendering order. Empty groups are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
    pub groups: Vec<StatusGroup>,
}

impl RenderedTable {
    /// All records in rendering order.
    pub fn records(&self) -> impl Iterator<Item = &IssueRecord> {
        self.groups.iter().flat_map(|group| group.issues.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.issues.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(status, issue count)` per rendered group.
    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.groups
            .iter()
            .map(|group| (group.status.as_str(), group.issues.len()))
            .collect()
    }
}

/// Render a user handle as a GitHub profile link.
///
/// An absent or blank handle renders as an empty cell.
pub fn format_handle(handle: Option<&str>) -> String {
    normalize_handle(handle)
        .as_deref()
        .map(profile_link)
        .unwrap_or_default()
}

/// Link for a handle that is already normalized.
fn profile_link(handle: &str) -> String {
    format!("[@{handle}](https://github.com/{handle})")
}

/// Builds the status table from an issue source and a doc listing.
pub struct TableRenderer<S, D> {
    registry: StatusRegistry,
    links: LinkResolver,
    source: Arc<S>,
    docs: Arc<D>,
}

impl<S: IssueSource, D: DocListing> TableRenderer<S, D> {
    pub fn new(registry: StatusRegistry, links: LinkResolver, source: Arc<S>, docs: Arc<D>) -> Self {
        Self {
            registry,
            links,
            source,
            docs,
        }
    }

    pub fn registry(&self) -> &StatusRegistry {
        &self.registry
    }

    /// Classify and link one issue.
    ///
    /// Returns `None` for pull requests, for issues outside the requested
    /// statuses, and for closed issues without a resolvable status.
    pub fn build_record(
        &self,
        issue: &RawIssue,
        files: &[String],
        request: &RenderRequest,
    ) -> Option<IssueRecord> {
        if issue.is_pull_request {
            return None;
        }

        let status = self.registry.classify(issue.label_names());
        if !request.includes(status) {
            return None;
        }

        // A closed issue nobody labelled is noise, not work.
        if issue.is_closed() && status == UNKNOWN_STATUS {
            return None;
        }

        let metadata = ExtractedMetadata::extract(&issue.body);
        let doc = find_doc_file(files, issue.number);
        let link = self.links.resolve(issue.number, doc, metadata.pull_request);

        Some(IssueRecord {
            number: issue.number,
            title: issue.title.trim().to_string(),
            link,
            assignee: normalize_handle(issue.assignee.as_deref()),
            champion: normalize_handle(metadata.champion.as_deref()),
            status: status.to_string(),
            doc: doc.map(str::to_string),
        })
    }

    /// Fetch, classify and group all issues for a request.
    pub async fn collect(&self, request: &RenderRequest) -> DomainResult<RenderedTable> {
        if let Some(statuses) = &request.statuses {
            for status in statuses {
                if self.registry.get(status).is_none() {
                    tracing::warn!(status = %status, "requested status is not a known status label");
                }
            }
        }

        let files = self.docs.list().await?;
        tracing::debug!(count = files.len(), "listed documentation files");

        let query = request
            .statuses
            .clone()
            .map_or_else(IssueQuery::all, IssueQuery::with_labels);
        let mut issues = self.source.issues(query);

        let mut by_status: HashMap<String, Vec<IssueRecord>> = HashMap::new();
        let mut seen = 0_usize;
        while let Some(issue) = issues.try_next().await? {
            seen += 1;
            match self.build_record(&issue, &files, request) {
                Some(record) => by_status.entry(record.status.clone()).or_default().push(record),
                None => tracing::trace!(number = issue.number, "skipping issue"),
            }
        }

        let order: Vec<&str> = match &request.statuses {
            Some(statuses) => statuses.iter().map(String::as_str).collect(),
            None => self.registry.labels().collect(),
        };

        let mut groups = Vec::new();
        for status in order {
            let Some(mut records) = by_status.remove(status) else {
                continue;
            };
            records.sort_by_key(|record| record.number);
            groups.push(StatusGroup {
                status: status.to_string(),
                display: self.registry.display(status).unwrap_or(status).to_string(),
                issues: records,
            });
        }

        let table = RenderedTable { groups };
        tracing::info!(fetched = seen, rendered = table.len(), "collected issues");
        Ok(table)
    }

    /// Format a collected table as Markdown lines: header, separator, rows.
    pub fn format_lines(&self, table: &RenderedTable) -> Vec<String> {
        let mut lines = Vec::with_capacity(table.len() + 2);
        lines.push(TABLE_HEADER.to_string());
        lines.push(TABLE_SEPARATOR.to_string());

        for group in &table.groups {
            for record in &group.issues {
                let cols = [
                    format!("[{}]({})", record.number, self.links.issue_url(record.number)),
                    format!("[{}]({})", record.title, record.link),
                    record.assignee.as_deref().map_or_else(String::new, profile_link),
                    group.display.clone(),
                ];
                lines.push(cols.join("|"));
            }
        }

        lines
    }

    /// Fetch and format in one step.
    pub async fn render(&self, request: &RenderRequest) -> DomainResult<Vec<String>> {
        let table = self.collect(request).await?;
        Ok(self.format_lines(&table))
    }
}
