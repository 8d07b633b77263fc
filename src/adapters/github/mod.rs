//! GitHub Issues adapter.
//!
//! Provides the [`IssueSource`](crate::domain::ports::IssueSource) backed by
//! the GitHub search API.

pub mod client;
pub mod models;
pub mod source;

pub use client::{build_search_query, GitHubClient};
pub use source::GitHubIssueSource;
