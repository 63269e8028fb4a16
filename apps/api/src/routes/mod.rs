//! Router configuration
//!
//! All routes live under `/api`. Every response allows any origin, method
//! and header.

pub mod health;
pub mod invoices;
pub mod items;

#[cfg(test)]
mod test_support;

use axum::{
    routing::{get, put},
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// `{"message": ...}` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Create the Axum router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let api = Router::new()
        // Items
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/{id}",
            put(items::update_item).delete(items::delete_item),
        )
        // Invoices
        .route(
            "/invoices",
            get(invoices::list_invoices).post(invoices::create_invoice),
        )
        // Health
        .route("/health", get(health::health_check));

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(middleware)
}
