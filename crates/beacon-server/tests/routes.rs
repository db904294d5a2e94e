//! Integration tests for the status routes.
//!
//! These drive the full router (including the CORS and trace layers) with
//! in-memory requests and check status codes and JSON bodies.

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use beacon_server::{config::ServiceConfig, routes, state::AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app(service: ServiceConfig) -> Router {
    routes::router(Arc::new(AppState::new(service)))
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = send(app, "GET", uri).await;
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("{} returned invalid JSON: {}", uri, e));
    (status, value)
}

#[tokio::test]
async fn test_root_ok() {
    let app = create_test_app(ServiceConfig::default());

    let (status, data) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["status"], "ok");
    assert!(data.get("message").is_some());
    assert!(data.get("version").is_some());
    assert!(data.get("git_sha").is_some());
}

#[tokio::test]
async fn test_root_reports_configured_version_and_sha() {
    let app = create_test_app(ServiceConfig::new("1.2.3", "abc123"));

    let (status, data) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        data,
        json!({
            "status": "ok",
            "message": "Azure DevOps Project 1 is running",
            "version": "1.2.3",
            "git_sha": "abc123",
        })
    );
}

#[tokio::test]
async fn test_health_with_defaults() {
    let app = create_test_app(ServiceConfig::from_lookup(|_| None));

    let (status, data) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data, json!({ "health": "healthy", "version": "dev" }));
}

#[tokio::test]
async fn test_root_with_defaults() {
    let app = create_test_app(ServiceConfig::from_lookup(|_| None));

    let (_, data) = get_json(&app, "/").await;
    assert_eq!(data["version"], "dev");
    assert_eq!(data["git_sha"], "local");
}

#[tokio::test]
async fn test_health_reports_configured_version() {
    let app = create_test_app(ServiceConfig::new("2.0.0", "ffff"));

    let (status, data) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data, json!({ "health": "healthy", "version": "2.0.0" }));
}

#[tokio::test]
async fn test_responses_are_json() {
    let app = create_test_app(ServiceConfig::default());

    for uri in ["/", "/health"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert_eq!(content_type, "application/json", "content type for {}", uri);
    }
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let app = create_test_app(ServiceConfig::new("1.2.3", "abc123"));

    for uri in ["/", "/health"] {
        let first = send(&app, "GET", uri).await;
        let second = send(&app, "GET", uri).await;
        let third = send(&app, "GET", uri).await;
        assert_eq!(first, second);
        assert_eq!(second, third);
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app(ServiceConfig::default());

    let (status, _) = send(&app, "GET", "/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let app = create_test_app(ServiceConfig::default());

    let (status, _) = send(&app, "POST", "/health").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app, "DELETE", "/").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = create_test_app(ServiceConfig::default());

    let request = Request::builder()
        .uri("/health")
        .header("origin", "https://dashboard.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
