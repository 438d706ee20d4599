//! Integration tests for `SheetClient` against a local `wiremock` server.
//!
//! No real network traffic is made. Covers the happy path, each error
//! variant `fetch_tab_csv` can return, and the swallow-and-log behaviour of
//! `fetch_tab`.

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clearance_scraper::{parse_clearance_csv, ScraperError, SheetClient};

const SHEET_ID: &str = "test-sheet";

const EXPORT_CSV: &str = "\
,Item# / SKU,Description,Wattage,Ontario,Louisville,Phoenix,Dallas,Chicago,Total,Notes,Spec Sheet
Area Lights,,,,,,,,,,,
,AL2-100,Area light 100W,100W,1,2,3,4,5,15,,https://example.com/al2.pdf
";

fn test_client(base_url: &str) -> SheetClient {
    SheetClient::with_base_url(5, "clearance-test/0.1", base_url)
        .expect("client construction should not fail")
}

async fn mount_export(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/spreadsheets/d/{SHEET_ID}/export")))
        .and(query_param("format", "csv"))
        .and(query_param("gid", "0"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_tab_csv_returns_body() {
    let server = MockServer::start().await;
    mount_export(&server, ResponseTemplate::new(200).set_body_string(EXPORT_CSV)).await;

    let client = test_client(&server.uri());
    let body = client
        .fetch_tab_csv(SHEET_ID, "0")
        .await
        .expect("should fetch csv");

    assert_eq!(body, EXPORT_CSV);
}

#[tokio::test]
async fn fetched_csv_parses_into_products() {
    let server = MockServer::start().await;
    mount_export(&server, ResponseTemplate::new(200).set_body_string(EXPORT_CSV)).await;

    let client = test_client(&server.uri());
    let body = client.fetch_tab(SHEET_ID, "0").await.expect("some body");
    let products = parse_clearance_csv(&body);

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].sku, "AL2-100");
    assert_eq!(products[0].category, "Area Light");
    assert_eq!(products[0].total, 15);
}

#[tokio::test]
async fn fetch_tab_csv_returns_unexpected_status_on_404() {
    let server = MockServer::start().await;
    mount_export(&server, ResponseTemplate::new(404)).await;

    let client = test_client(&server.uri());
    let result = client.fetch_tab_csv(SHEET_ID, "0").await;

    assert!(
        matches!(result, Err(ScraperError::UnexpectedStatus { status: 404, .. })),
        "expected UnexpectedStatus(404), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_tab_csv_returns_unexpected_status_on_500() {
    let server = MockServer::start().await;
    mount_export(&server, ResponseTemplate::new(500)).await;

    let client = test_client(&server.uri());
    let result = client.fetch_tab_csv(SHEET_ID, "0").await;

    assert!(
        matches!(result, Err(ScraperError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_tab_csv_does_not_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_tab_csv(SHEET_ID, "0").await;

    assert!(result.is_err());
    // `expect(1)` is verified when the server is dropped.
}

#[tokio::test]
async fn fetch_tab_csv_returns_empty_body_error() {
    let server = MockServer::start().await;
    mount_export(&server, ResponseTemplate::new(200).set_body_string("")).await;

    let client = test_client(&server.uri());
    let result = client.fetch_tab_csv(SHEET_ID, "0").await;

    assert!(
        matches!(result, Err(ScraperError::EmptyBody { .. })),
        "expected EmptyBody, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_tab_csv_times_out() {
    let server = MockServer::start().await;
    mount_export(
        &server,
        ResponseTemplate::new(200)
            .set_body_string(EXPORT_CSV)
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let client = SheetClient::with_base_url(1, "clearance-test/0.1", &server.uri())
        .expect("client construction should not fail");
    let result = client.fetch_tab_csv(SHEET_ID, "0").await;

    assert!(
        matches!(result, Err(ScraperError::Http(ref e)) if e.is_timeout()),
        "expected timeout, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_tab_returns_none_on_failure() {
    let server = MockServer::start().await;
    mount_export(&server, ResponseTemplate::new(500)).await;

    let client = test_client(&server.uri());
    assert!(client.fetch_tab(SHEET_ID, "0").await.is_none());
}

#[tokio::test]
async fn fetch_tab_returns_none_on_empty_body() {
    let server = MockServer::start().await;
    mount_export(&server, ResponseTemplate::new(200).set_body_string("")).await;

    let client = test_client(&server.uri());
    assert!(client.fetch_tab(SHEET_ID, "0").await.is_none());
}

#[tokio::test]
async fn fetch_tab_returns_none_when_server_unreachable() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = test_client(&uri);
    assert!(client.fetch_tab(SHEET_ID, "0").await.is_none());
}

#[tokio::test]
async fn fetch_tab_uses_requested_gid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/spreadsheets/d/{SHEET_ID}/export")))
        .and(query_param("gid", "987654"))
        .respond_with(ResponseTemplate::new(200).set_body_string("a,b\n"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert_eq!(
        client.fetch_tab(SHEET_ID, "987654").await.as_deref(),
        Some("a,b\n")
    );
}
