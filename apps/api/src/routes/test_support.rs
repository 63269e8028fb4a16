//! Router test helpers

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use pizzeria_db::{Database, DbConfig, InvoiceWriteMode};

use crate::{router, AppState};

pub async fn test_app() -> (Router, Database) {
    test_app_with_mode(InvoiceWriteMode::Atomic).await
}

pub async fn test_app_with_mode(mode: InvoiceWriteMode) -> (Router, Database) {
    let db = Database::connect(DbConfig::in_memory()).await.unwrap();
    let app = router(AppState::new(db.clone(), mode));
    (app, db)
}

/// Sends a request with a raw body and decodes the JSON response.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    send_raw(app, method, uri, &body.to_string()).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
