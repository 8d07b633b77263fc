//! End-to-end tests: GitHub search (mocked) -> table rows -> README.
//!
//! Covers classification, link resolution, filtering order and injection
//! with the live adapters wired the way the CLI wires them.

use std::sync::Arc;
use std::time::Duration;

use mockito::{Matcher, Server, ServerGuard};
use rfc_table::adapters::{DocsDirectory, GitHubClient, GitHubIssueSource};
use rfc_table::domain::models::StatusRegistry;
use rfc_table::domain::ports::StaticDocListing;
use rfc_table::domain::DomainError;
use rfc_table::services::{inject_file, LinkResolver, RenderRequest, TableRenderer};

fn fixture_issues() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({
            "number": 77,
            "title": "  Construct library graduation  ",
            "body": "Intro\n\n|PR|Champion|\n|--|--------|\n|#120|@carol|\n",
            "state": "open",
            "labels": [{ "name": "status/implementing" }, { "name": "feature" }],
            "assignee": { "login": "alice" }
        }),
        serde_json::json!({
            "number": 12,
            "title": "Bundled assets",
            "body": "No metadata here",
            "state": "open",
            "labels": [{ "name": "status/done" }],
            "assignee": null
        }),
        serde_json::json!({
            "number": 3,
            "title": "Stale idea",
            "body": null,
            "state": "closed",
            "labels": [],
            "assignee": null
        }),
        serde_json::json!({
            "number": 5,
            "title": "Conflicting labels",
            "body": "",
            "state": "open",
            "labels": [{ "name": "status/done" }, { "name": "status/proposed" }],
            "assignee": { "login": "bob" }
        }),
        serde_json::json!({
            "number": 40,
            "title": "Docs PR",
            "body": "",
            "state": "open",
            "labels": [{ "name": "status/done" }],
            "assignee": null,
            "pull_request": { "url": "https://api.github.com/repos/aws/aws-cdk-rfcs/pulls/40" }
        }),
    ]
}

async fn mock_search(server: &mut ServerGuard, items: Vec<serde_json::Value>) -> mockito::Mock {
    let body = serde_json::json!({
        "total_count": items.len(),
        "incomplete_results": false,
        "items": items
    })
    .to_string();

    server
        .mock("GET", "/search/issues")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

type Renderer = TableRenderer<GitHubIssueSource, StaticDocListing>;

fn renderer(server: &ServerGuard, docs: &[&str]) -> Renderer {
    let client = GitHubClient::new(server.url(), None, Duration::from_secs(5))
        .expect("Failed to create client");
    let source = GitHubIssueSource::new(client, "aws", "aws-cdk-rfcs", 100);
    let links = LinkResolver::new("https://github.com", "aws", "aws-cdk-rfcs", "main", "text");
    TableRenderer::new(
        StatusRegistry::default(),
        links,
        Arc::new(source),
        Arc::new(StaticDocListing::new(docs.iter().copied())),
    )
}

#[tokio::test]
async fn test_render_all_statuses() {
    let mut server = Server::new_async().await;
    let _mock = mock_search(&mut server, fixture_issues()).await;

    let lines = renderer(&server, &["0077-construct-graduation.md", "0012-assets.md"])
        .render(&RenderRequest::all())
        .await
        .unwrap();

    assert_eq!(
        lines,
        vec![
            "\\#|Title|Owner|Status".to_string(),
            "---|-----|-----|------".to_string(),
            "[5](https://github.com/aws/aws-cdk-rfcs/issues/5)|[Conflicting labels](https://github.com/aws/aws-cdk-rfcs/issues/5)|[@bob](https://github.com/bob)|❓unknown".to_string(),
            "[77](https://github.com/aws/aws-cdk-rfcs/issues/77)|[Construct library graduation](https://github.com/aws/aws-cdk-rfcs/blob/main/text/0077-construct-graduation.md)|[@alice](https://github.com/alice)|👷 implementing".to_string(),
            "[12](https://github.com/aws/aws-cdk-rfcs/issues/12)|[Bundled assets](https://github.com/aws/aws-cdk-rfcs/blob/main/text/0012-assets.md)||✅ done".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_render_links_pull_request_without_doc() {
    let mut server = Server::new_async().await;
    let _mock = mock_search(&mut server, fixture_issues()).await;

    let table = renderer(&server, &[])
        .collect(&RenderRequest::with_statuses(["implementing"]))
        .await
        .unwrap();

    let record = table.records().next().unwrap();
    assert_eq!(record.number, 77);
    assert_eq!(record.link, "https://github.com/aws/aws-cdk-rfcs/pull/120");
    assert_eq!(record.champion.as_deref(), Some("carol"));
    assert_eq!(table.len(), 1);
}

#[tokio::test]
async fn test_render_follows_filter_order() {
    let mut server = Server::new_async().await;
    let _mock = mock_search(&mut server, fixture_issues()).await;

    let table = renderer(&server, &[])
        .collect(&RenderRequest::with_statuses(["done", "implementing"]))
        .await
        .unwrap();

    let statuses: Vec<&str> = table.groups.iter().map(|g| g.status.as_str()).collect();
    assert_eq!(statuses, vec!["status/done", "status/implementing"]);
}

#[tokio::test]
async fn test_search_failure_aborts_render() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search/issues")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let err = renderer(&server, &[])
        .render(&RenderRequest::all())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::GitHub { status: 502, .. }));
}

#[tokio::test]
async fn test_inject_rendered_table_into_readme() {
    let mut server = Server::new_async().await;
    let _mock = mock_search(&mut server, fixture_issues()).await;

    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("text");
    tokio::fs::create_dir(&docs).await.unwrap();
    tokio::fs::write(docs.join("0012-assets.md"), "# Assets").await.unwrap();

    let client = GitHubClient::new(server.url(), None, Duration::from_secs(5)).unwrap();
    let renderer = TableRenderer::new(
        StatusRegistry::default(),
        LinkResolver::new("https://github.com", "aws", "aws-cdk-rfcs", "main", "text"),
        Arc::new(GitHubIssueSource::new(client, "aws", "aws-cdk-rfcs", 100)),
        Arc::new(DocsDirectory::new(&docs)),
    );
    let rows = renderer
        .render(&RenderRequest::with_statuses(["done"]))
        .await
        .unwrap();

    let readme = dir.path().join("README.md");
    tokio::fs::write(
        &readme,
        "# RFCs\n\n<!--BEGIN_TABLE-->\nstale row\n<!--END_TABLE-->\n\nFooter\n",
    )
    .await
    .unwrap();

    assert!(inject_file(&readme, &rows).await.unwrap());

    let text = tokio::fs::read_to_string(&readme).await.unwrap();
    assert_eq!(
        text,
        "# RFCs\n\n<!--BEGIN_TABLE-->\n\\#|Title|Owner|Status\n---|-----|-----|------\n[12](https://github.com/aws/aws-cdk-rfcs/issues/12)|[Bundled assets](https://github.com/aws/aws-cdk-rfcs/blob/main/text/0012-assets.md)||✅ done\n<!--END_TABLE-->\n\nFooter\n"
    );

    // A second run with the same rows leaves the file untouched.
    assert!(!inject_file(&readme, &rows).await.unwrap());
}
