//! API integration tests for the gateway surface itself: health report,
//! parameter validation, unmatched routes, and CORS. None of these tests
//! reach an upstream.

mod common;

use axum::http::{header, HeaderValue, StatusCode};
use serde_json::Value;

use common::{spawn_server, test_config, UNREACHABLE};

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn health_reports_status_uptime_and_environment() {
    let server = spawn_server(&test_config(UNREACHABLE));

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["environment"], "test");
    assert!(body["message"].as_str().unwrap().contains("running"));
    assert!(body["timestamp"].is_string());
    assert!(body["uptime"].is_u64());
}

// ============================================================================
// Validation (400 before any upstream call)
// ============================================================================

#[tokio::test]
async fn neo_feed_requires_both_dates() {
    let server = spawn_server(&test_config(UNREACHABLE));

    for path in [
        "/api/nasa/neo",
        "/api/nasa/neo?start_date=2025-01-01",
        "/api/nasa/neo?end_date=2025-01-07",
    ] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", path);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "start_date and end_date parameters are required"
        );
    }
}

#[tokio::test]
async fn image_search_requires_query() {
    let server = spawn_server(&test_config(UNREACHABLE));

    let response = server.get("/api/nasa/images").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], r#"Query parameter "q" is required"#);
}

#[tokio::test]
async fn earth_imagery_requires_coordinates() {
    let server = spawn_server(&test_config(UNREACHABLE));

    let response = server.get("/api/nasa/earth/imagery?lat=29.78").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Latitude (lat) and longitude (lon) parameters are required"
    );
}

#[tokio::test]
async fn pass_times_require_coordinates() {
    let server = spawn_server(&test_config(UNREACHABLE));

    let response = server.get("/api/nasa/iss/pass-times?lon=-0.1").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Latitude (lat) and longitude (lon) parameters are required"
    );
}

// ============================================================================
// Unmatched routes
// ============================================================================

#[tokio::test]
async fn unknown_route_returns_404_echoing_the_path() {
    let server = spawn_server(&test_config(UNREACHABLE));

    let response = server.get("/api/unknown-route").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Not found - /api/unknown-route");
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn cors_header_is_present_on_every_response() {
    let server = spawn_server(&test_config(UNREACHABLE));
    let origin = HeaderValue::from_static("http://localhost:3000");

    // Success response
    let response = server
        .get("/health")
        .add_header(header::ORIGIN, origin.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));

    // Error responses carry it too
    let response = server
        .get("/api/unknown-route")
        .add_header(header::ORIGIN, origin.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));

    let response = server
        .get("/api/nasa/images")
        .add_header(header::ORIGIN, origin)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}
