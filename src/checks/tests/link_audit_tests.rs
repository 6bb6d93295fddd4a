use crate::anchors;
use crate::checks::links;
use crate::reachability::Checker;
use crate::report::Diagnostic;
use crate::scope::ScopeFilter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn checker() -> Checker {
    Checker::with_defaults(4).unwrap()
}

fn scope(origin: &str) -> ScopeFilter {
    ScopeFilter::new(origin, &[]).unwrap()
}

#[tokio::test]
async fn test_page_without_anchors_reports_nothing() {
    let links = anchors::extract("<html><body><p>No links here</p></body></html>");
    let report = links::audit(links, &scope("http://example.com"), &checker()).await;

    assert_eq!(report.total_links, 0);
    assert!(report.diagnostics.is_empty());
}

#[tokio::test]
async fn test_mixed_page_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let html = format!(
        r#"<html><body>
            <a href="{0}/a">good</a>
            <a href="{0}/b">broken</a>
            <a href="https://other.example/c">external</a>
            <a href="">empty</a>
        </body></html>"#,
        server.uri()
    );

    let links = anchors::extract(&html);
    let report = links::audit(links, &scope(&server.uri()), &checker()).await;

    assert_eq!(report.total_links, 4);
    assert_eq!(report.diagnostics.len(), 2);

    // Discovery order: the broken link sits before the empty anchor
    match &report.diagnostics[0] {
        Diagnostic::UnreachableLink {
            display_text,
            status,
            ..
        } => {
            assert_eq!(display_text, "broken");
            assert_eq!(*status, Some(404));
        }
        other => panic!("expected unreachable diagnostic, got {:?}", other),
    }
    match &report.diagnostics[1] {
        Diagnostic::MalformedLink { display_text } => assert_eq!(display_text, "empty"),
        other => panic!("expected malformed diagnostic, got {:?}", other),
    }
}

#[tokio::test]
async fn test_relative_hrefs_resolve_against_the_origin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/relative"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let links = anchors::extract(r#"<a href="/relative">rel</a>"#);
    let report = links::audit(links, &scope(&server.uri()), &checker()).await;

    assert_eq!(report.total_links, 1);
    assert!(report.diagnostics.is_empty());
}

#[tokio::test]
async fn test_external_links_are_never_requested() {
    let external = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&external)
        .await;

    let html = format!(r#"<a href="{}/page">elsewhere</a>"#, external.uri());
    let links = anchors::extract(&html);
    let report = links::audit(links, &scope("http://audited.example"), &checker()).await;

    assert_eq!(report.total_links, 1);
    assert!(report.diagnostics.is_empty());
    // MockServer verifies the zero-request expectation on drop
}

#[tokio::test]
async fn test_empty_href_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let links = anchors::extract(r#"<a href="">nowhere</a><a>nothing</a>"#);
    let report = links::audit(links, &scope(&server.uri()), &checker()).await;

    assert_eq!(report.total_links, 2);
    assert_eq!(report.diagnostics.len(), 2);
    assert!(
        report
            .diagnostics
            .iter()
            .all(|d| matches!(d, Diagnostic::MalformedLink { .. }))
    );
}

#[tokio::test]
async fn test_refused_connection_yields_one_diagnostic() {
    // Port 1 is never bound in the test environment
    let links = anchors::extract(r#"<a href="http://127.0.0.1:1/x">dead</a>"#);
    let report = links::audit(links, &scope("http://127.0.0.1:1"), &checker()).await;

    assert_eq!(report.total_links, 1);
    assert_eq!(report.diagnostics.len(), 1);
    match &report.diagnostics[0] {
        Diagnostic::UnreachableLink {
            display_text,
            status,
            ..
        } => {
            assert_eq!(display_text, "dead");
            assert_eq!(*status, None);
        }
        other => panic!("expected unreachable diagnostic, got {:?}", other),
    }
}

#[tokio::test]
async fn test_repeated_hrefs_are_reported_per_occurrence() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let html = format!(
        r#"<a href="{0}/gone">first</a><a href="{0}/gone">second</a>"#,
        server.uri()
    );
    let links = anchors::extract(&html);
    let report = links::audit(links, &scope(&server.uri()), &checker()).await;

    assert_eq!(report.total_links, 2);
    assert_eq!(report.diagnostics.len(), 2);
}

#[tokio::test]
async fn test_excluded_assets_are_skipped_silently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let html = format!(r#"<a href="{}/logo.png">logo</a>"#, server.uri());
    let links = anchors::extract(&html);
    let patterns = vec![r"\.(jpg|png|css|js)$".to_string()];
    let filter = ScopeFilter::new(&server.uri(), &patterns).unwrap();
    let report = links::audit(links, &filter, &checker()).await;

    assert_eq!(report.total_links, 1);
    assert!(report.diagnostics.is_empty());
}

#[tokio::test]
async fn test_fragments_are_stripped_before_checking() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let html = format!(r#"<a href="{}/page#section">anchored</a>"#, server.uri());
    let links = anchors::extract(&html);
    let report = links::audit(links, &scope(&server.uri()), &checker()).await;

    assert!(report.diagnostics.is_empty());
}
