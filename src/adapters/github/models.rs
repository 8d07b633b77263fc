//! GitHub search API response models.
//!
//! These structs map to the GitHub REST API v3 JSON payloads. Only the
//! fields the renderer uses are modeled; everything else is ignored.

use serde::{Deserialize, Serialize};

use crate::domain::models::{IssueState, RawIssue};

/// Response of `GET /search/issues`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIssuesResponse {
    /// Total matches across all pages.
    pub total_count: u64,
    /// Set when GitHub timed out before finding every match.
    #[serde(default)]
    pub incomplete_results: bool,
    /// Issues and pull requests on this page.
    #[serde(default)]
    pub items: Vec<GitHubIssue>,
}

/// An issue returned by the GitHub API.
///
/// Note: issues and pull requests share the same endpoints. Pull requests
/// include a non-null `pull_request` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubIssue {
    /// Sequential number within the repository (e.g., 42 → "#42").
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Issue body text (may be absent or null).
    #[serde(default)]
    pub body: Option<String>,
    /// Current state: "open" or "closed".
    pub state: IssueState,
    /// Labels applied to the issue.
    #[serde(default)]
    pub labels: Vec<GitHubLabel>,
    /// Primary assignee, if any.
    #[serde(default)]
    pub assignee: Option<GitHubUser>,
    /// Present when this item is actually a pull request, not an issue.
    #[serde(default)]
    pub pull_request: Option<GitHubPullRequestRef>,
}

/// A label applied to a GitHub issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubLabel {
    /// The label name (e.g., "status/done").
    pub name: String,
}

/// A GitHub user reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}

/// Reference object present on pull requests (absent on plain issues).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubPullRequestRef {
    /// API URL of the pull request resource.
    #[serde(default)]
    pub url: Option<String>,
}

impl From<GitHubIssue> for RawIssue {
    fn from(issue: GitHubIssue) -> Self {
        Self {
            number: issue.number,
            title: issue.title,
            body: issue.body.unwrap_or_default(),
            labels: issue.labels.into_iter().map(|label| label.name).collect(),
            assignee: issue.assignee.map(|user| user.login),
            state: issue.state,
            is_pull_request: issue.pull_request.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_issue_deserialization() {
        let json = r#"{
            "id": 1,
            "number": 42,
            "title": "Fix login bug",
            "body": "Users cannot log in after the last deploy.",
            "state": "open",
            "labels": [
                { "name": "status/review", "color": "d73a4a" },
                { "name": "bug", "color": "e4e669" }
            ],
            "assignee": { "login": "octocat", "id": 1 },
            "pull_request": null,
            "html_url": "https://github.com/org/repo/issues/42"
        }"#;
        let issue: GitHubIssue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.number, 42);
        assert_eq!(issue.state, IssueState::Open);
        assert_eq!(issue.labels.len(), 2);
        assert!(issue.pull_request.is_none());

        let raw = RawIssue::from(issue);
        assert_eq!(raw.labels, vec!["status/review", "bug"]);
        assert_eq!(raw.assignee.as_deref(), Some("octocat"));
        assert!(!raw.is_pull_request);
    }

    #[test]
    fn test_minimal_issue_deserialization() {
        let json = r#"{
            "number": 1,
            "title": "Minimal issue",
            "body": null,
            "state": "closed"
        }"#;
        let issue: GitHubIssue = serde_json::from_str(json).unwrap();
        let raw = RawIssue::from(issue);
        assert!(raw.body.is_empty());
        assert!(raw.labels.is_empty());
        assert!(raw.assignee.is_none());
        assert!(raw.is_closed());
    }

    #[test]
    fn test_pr_detection_via_pull_request_field() {
        let json = r#"{
            "number": 99,
            "title": "Add feature X",
            "state": "open",
            "labels": [],
            "pull_request": { "url": "https://api.github.com/repos/org/repo/pulls/99" }
        }"#;
        let issue: GitHubIssue = serde_json::from_str(json).unwrap();
        assert!(RawIssue::from(issue).is_pull_request);
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                { "number": 1, "title": "a", "state": "open" },
                { "number": 2, "title": "b", "state": "closed" }
            ]
        }"#;
        let resp: SearchIssuesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.total_count, 2);
        assert_eq!(resp.items.len(), 2);
    }
}
