//! Infrastructure adapters for external systems.

pub mod docs_dir;
pub mod github;

pub use docs_dir::DocsDirectory;
pub use github::{GitHubClient, GitHubIssueSource};
