use super::*;
use std::collections::HashMap;

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use shared::{domain::ProjectId, error::ErrorCategory};
use tokio::net::TcpListener;

const TEST_KEY: &str = "test-key";

async fn valid_grid(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("key").map(String::as_str) != Some(TEST_KEY) {
        return StatusCode::FORBIDDEN.into_response();
    }
    Json(json!({
        "range": "Portfolio!A1:Z1000",
        "majorDimension": "ROWS",
        "values": [
            ["Title", "Date", "Year"],
            ["Alpha", "Spring", 2024],
            ["", "ignored"],
            ["ABOUT_SECTION"],
            ["Name", "Jane"],
            ["END_ABOUT"],
            ["Beta", null, true]
        ]
    }))
    .into_response()
}

async fn failing_status() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn broken_body() -> &'static str {
    "<html>definitely not json</html>"
}

async fn missing_values() -> Json<serde_json::Value> {
    Json(json!({ "range": "Portfolio!A1:Z1000", "majorDimension": "ROWS" }))
}

async fn header_only() -> Json<serde_json::Value> {
    Json(json!({ "values": [["Title", "Date"]] }))
}

async fn spawn_sheet_server() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/ok/*rest", get(valid_grid))
        .route("/status/*rest", get(failing_status))
        .route("/broken/*rest", get(broken_body))
        .route("/missing/*rest", get(missing_values))
        .route("/short/*rest", get(header_only));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

fn client_for(api_base: String) -> SheetsClient {
    SheetsClient::new(SheetsEndpoint::new("sheet-1", TEST_KEY).with_api_base(api_base))
}

struct RejectingSource;

#[async_trait]
impl SheetSource for RejectingSource {
    async fn fetch_grid(&self) -> Result<Vec<Vec<String>>, LoadError> {
        Err(LoadError::Retrieval("simulated network error".into()))
    }
}

#[test]
fn endpoint_url_follows_values_template() {
    let url = SheetsEndpoint::new("abc123", "secret").url().expect("url");
    assert_eq!(
        url.as_str(),
        "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/Portfolio!A1:Z1000?key=secret"
    );
}

#[test]
fn endpoint_url_encodes_range_with_spaces() {
    let url = SheetsEndpoint::new("abc", "k")
        .with_api_base("http://localhost:9/v4/spreadsheets/")
        .with_range("My Sheet!A1:B2")
        .url()
        .expect("url");
    assert_eq!(
        url.as_str(),
        "http://localhost:9/v4/spreadsheets/abc/values/My%20Sheet!A1:B2?key=k"
    );
}

#[test]
fn endpoint_with_unusable_base_is_a_retrieval_failure() {
    let err = SheetsEndpoint::new("abc", "k")
        .with_api_base("not a url")
        .url()
        .expect_err("invalid base");
    assert_eq!(err.category(), ErrorCategory::Retrieval);
}

#[tokio::test]
async fn blank_sheet_id_falls_back_without_a_request() {
    let loader = PortfolioLoader::new(SheetsClient::new(SheetsEndpoint::new("  ", "k")));
    let err = loader.try_load().await.expect_err("blank sheet id");
    assert_eq!(err.category(), ErrorCategory::Retrieval);
    assert_eq!(loader.load().await, fallback_snapshot());
}

#[test]
fn decode_values_stringifies_scalars() {
    let grid = decode_values(r#"{"values": [["a", 1, 2.5, false, null]]}"#).expect("decode");
    assert_eq!(grid, vec![vec!["a", "1", "2.5", "false", ""]]);
}

#[test]
fn decode_values_rejects_missing_or_nested_values() {
    let missing = decode_values(r#"{"range": "A1:B2"}"#).expect_err("missing");
    assert_eq!(missing.category(), ErrorCategory::MalformedPayload);

    let nested = decode_values(r#"{"values": [[["deep"]]]}"#).expect_err("nested");
    assert_eq!(nested.category(), ErrorCategory::MalformedPayload);

    let garbage = decode_values("not json").expect_err("garbage");
    assert_eq!(garbage.category(), ErrorCategory::MalformedPayload);
}

#[tokio::test]
async fn load_parses_valid_grid_from_server() {
    let server = spawn_sheet_server().await.expect("spawn server");
    let loader = PortfolioLoader::new(client_for(format!("{server}/ok")));

    let snapshot = loader.load().await;
    assert_ne!(snapshot, fallback_snapshot());
    assert_eq!(snapshot.projects.len(), 5);
    assert_eq!(snapshot.projects[0].title.as_deref(), Some("Alpha"));
    assert_eq!(
        snapshot.projects[0].extra.get("year").map(String::as_str),
        Some("2024")
    );
    assert_eq!(snapshot.projects[4].title.as_deref(), Some("Beta"));
    assert_eq!(snapshot.projects[4].id, ProjectId(5));
    assert_eq!(snapshot.projects[4].date, None);
    assert_eq!(snapshot.about.get("name"), Some("Jane"));
}

#[tokio::test]
async fn failures_resolve_to_fallback_with_matching_category() {
    let server = spawn_sheet_server().await.expect("spawn server");
    let cases = [
        ("status", ErrorCategory::Response),
        ("broken", ErrorCategory::MalformedPayload),
        ("missing", ErrorCategory::MalformedPayload),
        ("short", ErrorCategory::InsufficientData),
    ];

    for (route, category) in cases {
        let loader = PortfolioLoader::new(client_for(format!("{server}/{route}")));
        let err = loader.try_load().await.expect_err(route);
        assert_eq!(err.category(), category, "route {route}");
        assert_eq!(loader.load().await, fallback_snapshot(), "route {route}");
    }
}

#[tokio::test]
async fn non_success_status_is_reported_with_code() {
    let server = spawn_sheet_server().await.expect("spawn server");
    let loader = PortfolioLoader::new(client_for(format!("{server}/status")));
    match loader.try_load().await {
        Err(LoadError::Response { status }) => assert_eq!(status, 500),
        other => panic!("expected response failure, got {other:?}"),
    }
}

#[tokio::test]
async fn wrong_key_is_a_response_failure() {
    let server = spawn_sheet_server().await.expect("spawn server");
    let client = SheetsClient::new(
        SheetsEndpoint::new("sheet-1", "wrong-key").with_api_base(format!("{server}/ok")),
    );
    let err = client.fetch_grid().await.expect_err("forbidden");
    assert_eq!(err.category(), ErrorCategory::Response);
}

#[tokio::test]
async fn unreachable_server_falls_back() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let loader = PortfolioLoader::new(client_for(format!("http://{addr}")));
    let err = loader.try_load().await.expect_err("closed port");
    assert_eq!(err.category(), ErrorCategory::Retrieval);
    assert!(!err.to_string().contains(TEST_KEY));
    assert_eq!(loader.load().await, fallback_snapshot());
}

#[tokio::test]
async fn rejected_retrieval_resolves_to_exact_fallback() {
    let loader = PortfolioLoader::new(RejectingSource);
    assert_eq!(loader.load().await, fallback_snapshot());
}
