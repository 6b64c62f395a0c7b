// Fetch module tests.

use super::*;
use crate::config::{DEFAULT_USER_AGENT, MAX_RESPONSE_BODY_SIZE};
use crate::initialization::init_client;
use httptest::{cycle, matchers::*, responders::*, Expectation, Server};
// Shadows the private `fetch::request` module brought in by `super::*`
use httptest::matchers::request;

const PAGE: &str = "<html><head><title>Test</title></head><body>Hello</body></html>";

fn server_url(server: &Server, path: &str) -> Url {
    Url::parse(&server.url(path).to_string()).unwrap()
}

fn client() -> reqwest::Client {
    init_client().unwrap()
}

// validate_url

#[test]
fn test_validate_url_adds_https_to_bare_host() {
    let url = validate_url("example.com").unwrap();
    assert_eq!(url.as_str(), "https://example.com/");
}

#[test]
fn test_validate_url_rejects_other_schemes() {
    assert!(matches!(
        validate_url("ftp://example.com/file"),
        Err(ScrapeError::InvalidUrl { .. })
    ));
    assert!(matches!(
        validate_url("mailto:owner@example.com"),
        Err(ScrapeError::InvalidUrl { .. })
    ));
    assert!(matches!(validate_url("   "), Err(ScrapeError::InvalidUrl { .. })));
}

#[test]
fn test_validate_url_rejects_overlong_urls() {
    let long = format!("https://example.com/{}", "a".repeat(3000));
    assert!(matches!(
        validate_url(&long),
        Err(ScrapeError::InvalidUrl { .. })
    ));
}

#[test]
fn test_validate_url_blocked_extension_case_insensitive() {
    match validate_url("https://example.com/files/Brochure.PDF") {
        Err(ScrapeError::UnsupportedContent { extension, .. }) => assert_eq!(extension, "pdf"),
        other => panic!("expected UnsupportedContent, got {:?}", other),
    }
    assert!(validate_url("https://example.com/pdf-guides/").is_ok());
    assert!(validate_url("https://example.com/about.html").is_ok());
}

#[test]
fn test_content_type_detection() {
    assert!(is_html_content_type("text/html"));
    assert!(is_html_content_type("Text/HTML; charset=UTF-8"));
    assert!(is_html_content_type("application/xhtml+xml"));
    assert!(!is_html_content_type("application/json"));
    assert!(!is_html_content_type("application/pdf"));
}

// fetch_page

#[tokio::test]
async fn test_fetch_page_success() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/"),
            request::headers(contains(("user-agent", "test-agent/1.0"))),
            request::headers(contains(key("accept-language"))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "text/html; charset=utf-8")
                .insert_header("X-Powered-By", "Test")
                .body(PAGE),
        ),
    );

    let page = fetch_page(&client(), &server_url(&server, "/"), 5_000, "test-agent/1.0")
        .await
        .unwrap();
    assert_eq!(page.status, 200);
    assert_eq!(page.html, PAGE);
    assert_eq!(page.final_url.path(), "/");
    assert!(page.headers.contains_key("x-powered-by"));
}

#[tokio::test]
async fn test_fetch_page_missing_content_type_is_accepted() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/plain"))
            .respond_with(status_code(200).body(PAGE)),
    );

    let page = fetch_page(
        &client(),
        &server_url(&server, "/plain"),
        5_000,
        DEFAULT_USER_AGENT,
    )
    .await
    .unwrap();
    assert!(page.html.contains("Hello"));
}

#[tokio::test]
async fn test_fetch_page_follows_redirects() {
    let server = Server::run();
    let target = server.url("/new").to_string();
    server.expect(
        Expectation::matching(request::method_path("GET", "/old"))
            .respond_with(status_code(301).insert_header("Location", target.as_str())),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/new")).respond_with(
            status_code(200)
                .insert_header("Content-Type", "text/html")
                .body(PAGE),
        ),
    );

    let page = fetch_page(
        &client(),
        &server_url(&server, "/old"),
        5_000,
        DEFAULT_USER_AGENT,
    )
    .await
    .unwrap();
    assert_eq!(page.final_url.path(), "/new");
}

#[tokio::test]
async fn test_fetch_page_not_found() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/missing"))
            .respond_with(status_code(404)),
    );

    let err = fetch_page(
        &client(),
        &server_url(&server, "/missing"),
        5_000,
        DEFAULT_USER_AGENT,
    )
    .await
    .unwrap_err();
    assert_eq!(err.fetch_kind(), Some(ErrorType::HttpRequestNotFound));
}

#[tokio::test]
async fn test_fetch_page_rejects_non_html() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api")).respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/json")
                .body(r#"{"key": "value"}"#),
        ),
    );

    let err = fetch_page(
        &client(),
        &server_url(&server, "/api"),
        5_000,
        DEFAULT_USER_AGENT,
    )
    .await
    .unwrap_err();
    assert_eq!(err.fetch_kind(), Some(ErrorType::NonHtmlContent));
}

#[tokio::test]
async fn test_fetch_page_rejects_oversized_body() {
    let server = Server::run();
    let body = "a".repeat(MAX_RESPONSE_BODY_SIZE + 1);
    server.expect(
        Expectation::matching(request::method_path("GET", "/huge")).respond_with(
            status_code(200)
                .insert_header("Content-Type", "text/html")
                .body(body),
        ),
    );

    let err = fetch_page(
        &client(),
        &server_url(&server, "/huge"),
        10_000,
        DEFAULT_USER_AGENT,
    )
    .await
    .unwrap_err();
    assert_eq!(err.fetch_kind(), Some(ErrorType::BodyTooLarge));
}

#[tokio::test]
async fn test_fetch_page_times_out() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/slow")).respond_with(
            delay_and_then(
                Duration::from_millis(1_500),
                status_code(200)
                    .insert_header("Content-Type", "text/html")
                    .body(PAGE),
            ),
        ),
    );

    let started = std::time::Instant::now();
    let err = fetch_page(
        &client(),
        &server_url(&server, "/slow"),
        200,
        DEFAULT_USER_AGENT,
    )
    .await
    .unwrap_err();
    assert_eq!(err.fetch_kind(), Some(ErrorType::HttpRequestTimeoutError));
    assert!(started.elapsed() < Duration::from_millis(1_500));
}

#[tokio::test]
async fn test_fetch_page_blocked_extension_never_hits_network() {
    // Nothing listens on port 9; a network attempt would surface as a connect error
    let url = Url::parse("http://127.0.0.1:9/menu.docx").unwrap();
    let err = fetch_page(&client(), &url, 1_000, DEFAULT_USER_AGENT)
        .await
        .unwrap_err();
    assert!(matches!(err, ScrapeError::UnsupportedContent { .. }));
}

// fetch_with_retry

#[tokio::test]
async fn test_fetch_with_retry_recovers_from_transient_status() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/flaky"))
            .times(2)
            .respond_with(cycle![
                status_code(503),
                status_code(200)
                    .insert_header("Content-Type", "text/html")
                    .body(PAGE),
            ]),
    );

    let page = fetch_with_retry(
        &client(),
        &server_url(&server, "/flaky"),
        5_000,
        DEFAULT_USER_AGENT,
        1,
    )
    .await
    .unwrap();
    assert_eq!(page.status, 200);
}

#[tokio::test]
async fn test_fetch_with_retry_does_not_retry_permanent_errors() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/gone"))
            .times(1)
            .respond_with(status_code(404)),
    );

    let err = fetch_with_retry(
        &client(),
        &server_url(&server, "/gone"),
        5_000,
        DEFAULT_USER_AGENT,
        3,
    )
    .await
    .unwrap_err();
    assert_eq!(err.fetch_kind(), Some(ErrorType::HttpRequestNotFound));
}

#[tokio::test]
async fn test_fetch_with_retry_zero_retries_returns_first_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/busy"))
            .times(1)
            .respond_with(status_code(503)),
    );

    let err = fetch_with_retry(
        &client(),
        &server_url(&server, "/busy"),
        5_000,
        DEFAULT_USER_AGENT,
        0,
    )
    .await
    .unwrap_err();
    assert_eq!(
        err.fetch_kind(),
        Some(ErrorType::HttpRequestServiceUnavailable)
    );
}
