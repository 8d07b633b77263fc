//! Issue source backed by GitHub search.

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{GitHubConfig, RawIssue};
use crate::domain::ports::{IssueQuery, IssueSource, IssueStream};

use super::client::{build_search_query, GitHubClient, SEARCH_RESULT_LIMIT};

/// Where the pager is in the result set.
#[derive(Debug, Clone, Copy)]
struct PageCursor {
    page: u32,
    fetched: u64,
    done: bool,
}

impl PageCursor {
    const fn first() -> Self {
        Self {
            page: 1,
            fetched: 0,
            done: false,
        }
    }
}

const fn exceeds_search_cap(total_count: u64) -> bool {
    total_count > SEARCH_RESULT_LIMIT
}

/// Short page, every match seen, or the search cap reached.
fn is_last_page(count: u64, per_page: u32, fetched: u64, total_count: u64) -> bool {
    count < u64::from(per_page) || fetched >= total_count || fetched >= SEARCH_RESULT_LIMIT
}

/// Fetch the page under `cursor`, or `None` once paging is finished.
async fn fetch_page(
    client: &GitHubClient,
    query: String,
    per_page: u32,
    cursor: PageCursor,
) -> DomainResult<Option<(Vec<RawIssue>, PageCursor)>> {
    if cursor.done {
        return Ok(None);
    }

    let resp = client.search_issues(&query, cursor.page, per_page).await?;
    if resp.incomplete_results {
        tracing::warn!(page = cursor.page, "GitHub returned incomplete search results");
    }
    if cursor.page == 1 && exceeds_search_cap(resp.total_count) {
        tracing::warn!(
            total = resp.total_count,
            limit = SEARCH_RESULT_LIMIT,
            "search matches more issues than GitHub serves, table will be truncated"
        );
    }

    let count = resp.items.len() as u64;
    let fetched = cursor.fetched + count;
    let done = is_last_page(count, per_page, fetched, resp.total_count);

    tracing::debug!(page = cursor.page, count, total = resp.total_count, "fetched page");

    let issues = resp.items.into_iter().map(RawIssue::from).collect();
    let next = PageCursor {
        page: cursor.page + 1,
        fetched,
        done,
    };
    Ok(Some((issues, next)))
}

/// Streams one repository's issues page by page.
///
/// Paging stops on a short or empty page, once `total_count` results have
/// been seen, or at GitHub's search result cap.
#[derive(Debug, Clone)]
pub struct GitHubIssueSource {
    client: GitHubClient,
    owner: String,
    repo: String,
    per_page: u32,
}

impl GitHubIssueSource {
    pub fn new(
        client: GitHubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        per_page: u32,
    ) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
            per_page: per_page.clamp(1, 100),
        }
    }

    pub fn from_config(client: GitHubClient, config: &GitHubConfig) -> Self {
        Self::new(client, &config.owner, &config.repo, config.per_page)
    }
}

impl IssueSource for GitHubIssueSource {
    fn issues(&self, query: IssueQuery) -> IssueStream<'_> {
        let q = build_search_query(&self.owner, &self.repo, query.labels.as_deref());
        tracing::info!(owner = %self.owner, repo = %self.repo, query = %q, "fetching issues");

        let client = &self.client;
        let per_page = self.per_page;

        stream::try_unfold(PageCursor::first(), move |cursor| {
            fetch_page(client, q.clone(), per_page, cursor)
        })
        .map_ok(|issues| stream::iter(issues.into_iter().map(Ok::<RawIssue, DomainError>)))
        .try_flatten()
        .boxed()
    }
}
