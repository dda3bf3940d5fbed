//! Shared fixtures for integration tests.
//!
//! Every fixture gets its own in-memory SQLite database with migrations applied.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use employee_api::api::{create_router, AppState};
use employee_api::config::Config;
use employee_api::infra::Database;

/// Connect to a fresh in-memory database and run migrations
pub async fn test_database() -> Arc<Database> {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        ..Config::default()
    };

    Arc::new(
        Database::connect(&config)
            .await
            .expect("in-memory database should connect"),
    )
}

/// Build the full application router over a fresh database
pub async fn test_app() -> Router {
    create_router(AppState::from_database(test_database().await))
}

/// Send a request and return status with raw body bytes
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");

    (status, bytes.to_vec())
}

/// Send a request and parse the body as JSON
pub async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, json)
}
