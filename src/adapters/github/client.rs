//! GitHub HTTP client.
//!
//! Wraps the one GitHub REST API v3 endpoint the renderer needs,
//! `GET /search/issues`. Requests are authenticated only when a token is
//! available; public repositories work without one at a lower rate limit.

use std::time::Duration;

use reqwest::Client;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::GitHubConfig;

use super::models::SearchIssuesResponse;

/// GitHub search never serves more than this many results for one query.
pub const SEARCH_RESULT_LIMIT: u64 = 1_000;

const USER_AGENT: &str = concat!("rfc-table/", env!("CARGO_PKG_VERSION"));

/// Build the search query for one repository's issues.
///
/// `label:a,b` matches issues carrying any of the listed labels.
pub fn build_search_query(owner: &str, repo: &str, labels: Option<&[String]>) -> String {
    match labels {
        Some(labels) if !labels.is_empty() => {
            format!("repo:{owner}/{repo} is:issue label:{}", labels.join(","))
        }
        _ => format!("repo:{owner}/{repo} is:issue"),
    }
}

/// HTTP client for the GitHub REST API v3.
///
/// Network failures map to [`DomainError::Http`], non-2xx responses to
/// [`DomainError::GitHub`] with the response body attached.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// API base URL without trailing slash.
    api_base: String,
    /// Personal access token, if any.
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client against `api_base` with an optional token.
    pub fn new(
        api_base: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> DomainResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Create a client from configuration, reading the token from the
    /// environment variable named by `token_env`.
    ///
    /// A missing or empty variable yields an unauthenticated client.
    pub fn from_config(config: &GitHubConfig) -> DomainResult<Self> {
        let token = std::env::var(&config.token_env).ok();
        let client = Self::new(
            config.api_base.clone(),
            token,
            Duration::from_secs(config.timeout_secs),
        )?;
        if !client.is_authenticated() {
            tracing::warn!(
                token_env = %config.token_env,
                "no GitHub token set, using unauthenticated requests"
            );
        }
        Ok(client)
    }

    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Build a request with the standard GitHub headers.
    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Fetch one page of issue search results.
    ///
    /// `page` is 1-based.
    pub async fn search_issues(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> DomainResult<SearchIssuesResponse> {
        let url = format!("{}/search/issues", self.api_base);
        let page = page.to_string();
        let per_page = per_page.to_string();

        tracing::debug!(query, page = %page, "searching GitHub issues");

        let resp = self
            .request(reqwest::Method::GET, &url)
            .query(&[("q", query), ("per_page", per_page.as_str()), ("page", page.as_str())])
            .send()
            .await
            .map_err(|e| DomainError::Http(format!("GitHub search request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::GitHub { status, body });
        }

        resp.json::<SearchIssuesResponse>()
            .await
            .map_err(|e| DomainError::Serialization(format!("GitHub search parse failed: {e}")))
    }
}
