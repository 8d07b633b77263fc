//! Issue source port.

use futures::stream::BoxStream;

use crate::domain::errors::DomainResult;
use crate::domain::models::RawIssue;

/// Lazy, finite stream of issues.
///
/// Adapters fetch pages on demand as the stream is polled, so the renderer
/// never needs the whole issue set in memory before it starts classifying.
pub type IssueStream<'a> = BoxStream<'a, DomainResult<RawIssue>>;

/// What to ask the issue tracker for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueQuery {
    /// Status labels to pre-filter on server side. `None` fetches every issue.
    pub labels: Option<Vec<String>>,
}

impl IssueQuery {
    /// Query for all issues in the repository.
    pub fn all() -> Self {
        Self::default()
    }

    /// Query for issues carrying any of the given labels.
    ///
    /// An empty list is treated as no filter.
    pub fn with_labels(labels: Vec<String>) -> Self {
        Self {
            labels: (!labels.is_empty()).then_some(labels),
        }
    }
}

/// Port for the issue tracker the table is built from.
///
/// The returned stream may yield pull requests; filtering them out is the
/// caller's job. A stream error aborts the render.
pub trait IssueSource: Send + Sync {
    fn issues(&self, query: IssueQuery) -> IssueStream<'_>;
}
