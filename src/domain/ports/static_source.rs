//! In-memory port implementations.
//!
//! Used by tests and benchmarks where the issue set is known up front.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::domain::errors::DomainResult;
use crate::domain::models::RawIssue;

use super::{DocListing, IssueQuery, IssueSource, IssueStream};

/// Issue source backed by a fixed list.
///
/// Mimics the server-side label pre-filter: with labels in the query, only
/// issues carrying at least one of them are yielded.
#[derive(Debug, Clone, Default)]
pub struct StaticIssueSource {
    issues: Vec<RawIssue>,
}

impl StaticIssueSource {
    pub fn new(issues: Vec<RawIssue>) -> Self {
        Self { issues }
    }
}

impl IssueSource for StaticIssueSource {
    fn issues(&self, query: IssueQuery) -> IssueStream<'_> {
        let matching: Vec<DomainResult<RawIssue>> = self
            .issues
            .iter()
            .filter(|issue| match &query.labels {
                Some(wanted) => issue.labels.iter().any(|l| wanted.contains(l)),
                None => true,
            })
            .cloned()
            .map(Ok)
            .collect();
        stream::iter(matching).boxed()
    }
}

/// Doc listing backed by a fixed list of filenames.
#[derive(Debug, Clone, Default)]
pub struct StaticDocListing {
    files: Vec<String>,
}

impl StaticDocListing {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl DocListing for StaticDocListing {
    async fn list(&self) -> DomainResult<Vec<String>> {
        Ok(self.files.clone())
    }
}
