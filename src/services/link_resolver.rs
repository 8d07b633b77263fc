//! Picks the URL an issue's title links to.

use crate::domain::models::{DocsConfig, GitHubConfig};

/// Builds GitHub web URLs for one repository.
///
/// Link priority for a title: the matched doc file, then the pull request
/// named in the issue body, then the issue itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResolver {
    repo_url: String,
    branch: String,
    docs_path: String,
}

impl LinkResolver {
    pub fn new(
        web_base: &str,
        owner: &str,
        repo: &str,
        branch: impl Into<String>,
        docs_path: &str,
    ) -> Self {
        Self {
            repo_url: format!("{}/{owner}/{repo}", web_base.trim_end_matches('/')),
            branch: branch.into(),
            docs_path: docs_path
                .trim_start_matches("./")
                .trim_matches('/')
                .to_string(),
        }
    }

    pub fn from_config(github: &GitHubConfig, docs: &DocsConfig) -> Self {
        Self::new(
            &github.web_base,
            &github.owner,
            &github.repo,
            docs.branch.clone(),
            &docs.dir,
        )
    }

    pub fn issue_url(&self, number: u64) -> String {
        format!("{}/issues/{number}", self.repo_url)
    }

    pub fn pull_url(&self, number: u64) -> String {
        format!("{}/pull/{number}", self.repo_url)
    }

    pub fn doc_url(&self, filename: &str) -> String {
        if self.docs_path.is_empty() {
            format!("{}/blob/{}/{filename}", self.repo_url, self.branch)
        } else {
            format!(
                "{}/blob/{}/{}/{filename}",
                self.repo_url, self.branch, self.docs_path
            )
        }
    }

    /// The single most specific URL for an issue.
    pub fn resolve(&self, number: u64, doc: Option<&str>, pull_request: Option<u64>) -> String {
        match (doc, pull_request) {
            (Some(doc), _) => self.doc_url(doc),
            (None, Some(pr)) => self.pull_url(pr),
            (None, None) => self.issue_url(number),
        }
    }
}
