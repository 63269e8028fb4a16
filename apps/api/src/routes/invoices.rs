//! Invoice routes

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use pizzeria_core::{Invoice, NewInvoice};

use crate::error::ApiResult;
use crate::extractors::ApiJson;
use crate::AppState;

/// Body of a successful `POST /api/invoices`.
#[derive(Debug, Serialize)]
pub struct InvoiceCreated {
    pub message: &'static str,
    pub invoice_id: i64,
}

/// GET /api/invoices - All invoices with their lines
pub async fn list_invoices(State(state): State<AppState>) -> ApiResult<Json<Vec<Invoice>>> {
    let invoices = state.db.invoices().list().await?;
    Ok(Json(invoices))
}

/// POST /api/invoices - Record an order
///
/// `total_amount` is stored as sent; it is not recomputed from the lines.
pub async fn create_invoice(
    State(state): State<AppState>,
    ApiJson(invoice): ApiJson<NewInvoice>,
) -> ApiResult<(StatusCode, Json<InvoiceCreated>)> {
    let invoice_id = state
        .db
        .invoices()
        .create(&invoice, state.write_mode)
        .await?;

    info!(
        invoice_id,
        customer = %invoice.customer_name,
        total = %invoice.total_amount,
        lines = invoice.items.len(),
        "Invoice created"
    );

    Ok((
        StatusCode::CREATED,
        Json(InvoiceCreated {
            message: "Invoice created successfully",
            invoice_id,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use axum::http::{Method, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};

    use pizzeria_db::InvoiceWriteMode;

    async fn create_item(app: &Router, name: &str, price: f64) -> i64 {
        let (status, item) = send(
            app,
            Method::POST,
            "/api/items",
            json!({"name": name, "price": price, "type": "pizza"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        item["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list_nests_lines() {
        let (app, _db) = test_app().await;
        let margherita = create_item(&app, "Margherita", 10.0).await;
        let cola = create_item(&app, "Cola", 2.5).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/invoices",
            json!({
                "customer_name": "Ada",
                "total_amount": 22.5,
                "items": [
                    {"item_id": margherita, "quantity": 2},
                    {"item_id": cola, "quantity": 1}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Invoice created successfully");
        let invoice_id = body["invoice_id"].as_i64().unwrap();

        let (status, invoices) = get(&app, "/api/invoices").await;
        assert_eq!(status, StatusCode::OK);

        let invoices = invoices.as_array().unwrap();
        assert_eq!(invoices.len(), 1);

        let invoice = &invoices[0];
        assert_eq!(invoice["id"], invoice_id);
        assert_eq!(invoice["customer_name"], "Ada");
        assert_eq!(invoice["total_amount"], 22.5);
        assert!(invoice["date"].is_string());
        assert_eq!(
            invoice["items"],
            json!([
                {"item_id": margherita, "quantity": 2, "item_name": "Margherita", "price": 10.0},
                {"item_id": cola, "quantity": 1, "item_name": "Cola", "price": 2.5}
            ])
        );
    }

    #[tokio::test]
    async fn test_total_is_stored_as_sent() {
        let (app, _db) = test_app().await;
        let pizza = create_item(&app, "Margherita", 10.0).await;

        send(
            &app,
            Method::POST,
            "/api/invoices",
            json!({
                "customer_name": "Grace",
                "total_amount": 1.23,
                "items": [{"item_id": pizza, "quantity": 3}]
            }),
        )
        .await;

        let (_, invoices) = get(&app, "/api/invoices").await;
        assert_eq!(invoices[0]["total_amount"], 1.23);
    }

    #[tokio::test]
    async fn test_invoice_without_lines_lists_empty_items() {
        let (app, _db) = test_app().await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/invoices",
            json!({"customer_name": "Walk-in", "total_amount": 0}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, invoices) = get(&app, "/api/invoices").await;
        assert_eq!(invoices[0]["items"], json!([]));
    }

    #[tokio::test]
    async fn test_customer_name_alone_creates_zero_total_invoice() {
        let (app, _db) = test_app().await;

        // The frontend's "Create Invoice" form sends nothing else
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/invoices",
            json!({"customer_name": "Ada"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Invoice created successfully");

        let (_, invoices) = get(&app, "/api/invoices").await;
        assert_eq!(invoices[0]["id"], body["invoice_id"]);
        assert_eq!(invoices[0]["customer_name"], "Ada");
        assert_eq!(invoices[0]["total_amount"], 0.0);
        assert_eq!(invoices[0]["items"], json!([]));
    }

    #[tokio::test]
    async fn test_null_total_binds_as_zero() {
        let (app, _db) = test_app().await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/invoices",
            json!({"customer_name": "Grace", "total_amount": null, "items": null}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, invoices) = get(&app, "/api/invoices").await;
        assert_eq!(invoices[0]["total_amount"], 0.0);
    }

    #[tokio::test]
    async fn test_list_empty_is_empty_array() {
        let (app, _db) = test_app().await;

        let (status, invoices) = get(&app, "/api/invoices").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(invoices, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_body_is_400_and_writes_nothing() {
        let (app, _db) = test_app().await;

        for body in [
            "{",
            r#"{"customer_name": "Ada", "total_amount": "10"}"#,
            r#"{"customer_name": "Ada", "total_amount": 10, "items": {"item_id": 1}}"#,
            r#"{"customer_name": "Ada", "items": [{"item_id": "one", "quantity": 1}]}"#,
        ] {
            let (status, json) = send_raw(&app, Method::POST, "/api/invoices", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json["error"], "Invalid input");
        }

        let (_, invoices) = get(&app, "/api/invoices").await;
        assert_eq!(invoices, json!([]));
    }

    #[tokio::test]
    async fn test_unknown_item_rolls_back_atomic_invoice() {
        let (app, _db) = test_app().await;
        let pizza = create_item(&app, "Margherita", 10.0).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/invoices",
            json!({
                "customer_name": "Ada",
                "total_amount": 30,
                "items": [
                    {"item_id": pizza, "quantity": 2},
                    {"item_id": 9999, "quantity": 1}
                ]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Invalid reference");
        assert!(!body.to_string().contains("FOREIGN KEY"));

        let (_, invoices) = get(&app, "/api/invoices").await;
        assert_eq!(invoices, json!([]));
    }

    #[tokio::test]
    async fn test_unknown_item_leaves_partial_sequential_invoice() {
        let (app, _db) = test_app_with_mode(InvoiceWriteMode::Sequential).await;
        let pizza = create_item(&app, "Margherita", 10.0).await;
        let cola = create_item(&app, "Cola", 2.5).await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/invoices",
            json!({
                "customer_name": "Ada",
                "total_amount": 32.5,
                "items": [
                    {"item_id": pizza, "quantity": 2},
                    {"item_id": 9999, "quantity": 1},
                    {"item_id": cola, "quantity": 1}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        // The invoice row and the line before the failure were kept
        let (_, invoices) = get(&app, "/api/invoices").await;
        let invoices = invoices.as_array().unwrap();
        assert_eq!(invoices.len(), 1);

        let lines: Vec<&Value> = invoices[0]["items"].as_array().unwrap().iter().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["item_id"], pizza);
        assert_eq!(lines[0]["quantity"], 2);
    }

    #[tokio::test]
    async fn test_line_names_follow_item_updates() {
        let (app, _db) = test_app().await;
        let pizza = create_item(&app, "Margherita", 10.0).await;

        send(
            &app,
            Method::POST,
            "/api/invoices",
            json!({
                "customer_name": "Ada",
                "total_amount": 10,
                "items": [{"item_id": pizza, "quantity": 1}]
            }),
        )
        .await;

        send(
            &app,
            Method::PUT,
            &format!("/api/items/{pizza}"),
            json!({"name": "Margherita DOP", "price": 11.5, "type": "pizza"}),
        )
        .await;

        let (_, invoices) = get(&app, "/api/invoices").await;
        let line = &invoices[0]["items"][0];
        assert_eq!(line["item_name"], "Margherita DOP");
        assert_eq!(line["price"], 11.5);
        assert_eq!(invoices[0]["total_amount"], 10.0);
    }
}
