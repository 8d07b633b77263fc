//! Issue snapshots and the records built from them.

use serde::{Deserialize, Serialize};

/// Open/closed state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

impl std::fmt::Display for IssueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// An issue as delivered by the issue source.
///
/// Immutable snapshot; the renderer never writes back to the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawIssue {
    /// Repository-unique issue number.
    pub number: u64,
    pub title: String,
    /// Body text, empty when the issue has none.
    pub body: String,
    /// Names of all labels applied to the issue.
    pub labels: Vec<String>,
    /// Login of the assignee, if any.
    pub assignee: Option<String>,
    pub state: IssueState,
    /// GitHub serves pull requests through the issue endpoints too.
    pub is_pull_request: bool,
}

impl RawIssue {
    /// Create an open issue with no body, labels or assignee.
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            body: String::new(),
            labels: Vec::new(),
            assignee: None,
            state: IssueState::Open,
            is_pull_request: false,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn with_assignee(mut self, login: impl Into<String>) -> Self {
        self.assignee = Some(login.into());
        self
    }

    pub const fn with_state(mut self, state: IssueState) -> Self {
        self.state = state;
        self
    }

    pub const fn as_pull_request(mut self) -> Self {
        self.is_pull_request = true;
        self
    }

    pub fn is_closed(&self) -> bool {
        self.state == IssueState::Closed
    }

    /// Label names as string slices, for classification.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// A classified, linked issue ready for rendering.
///
/// Built fresh on every render and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRecord {
    pub number: u64,
    /// Title with surrounding whitespace removed.
    pub title: String,
    /// Most specific URL for the issue: doc file, pull request, or issue.
    pub link: String,
    /// Normalized assignee handle (no leading `@`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Normalized champion handle recovered from the issue body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub champion: Option<String>,
    /// Status registry label.
    pub status: String,
    /// Matched documentation filename.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

/// Normalize a user handle: strip one leading `@`, trim, drop if empty.
pub fn normalize_handle(handle: Option<&str>) -> Option<String> {
    let handle = handle?;
    let handle = handle.strip_prefix('@').unwrap_or(handle).trim();
    if handle.is_empty() {
        None
    } else {
        Some(handle.to_string())
    }
}
