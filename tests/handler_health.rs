mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{InMemoryLinkRepository, InMemoryVisitRepository, create_test_server};

#[tokio::test]
async fn test_ping() {
    let server = create_test_server(InMemoryLinkRepository::new(), InMemoryVisitRepository::new());

    let response = server.get("/ping").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "pong");
}

#[tokio::test]
async fn test_health_ok() {
    let server = create_test_server(InMemoryLinkRepository::new(), InMemoryVisitRepository::new());

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded() {
    let links = InMemoryLinkRepository::new();
    links.set_failing(true);
    let server = create_test_server(links, InMemoryVisitRepository::new());

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_unknown_route() {
    let server = create_test_server(InMemoryLinkRepository::new(), InMemoryVisitRepository::new());

    let response = server.get("/does/not/exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "The requested resource was not found");
    assert_eq!(body["path"], "/does/not/exist");
}
