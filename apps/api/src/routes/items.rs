//! Item routes
//!
//! `update` and `delete` acknowledge success even when no row matched the
//! id.

use axum::extract::State;
use axum::Json;
use tracing::info;

use pizzeria_core::{Item, NewItem};

use super::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiJson, ApiPath};
use crate::AppState;

/// GET /api/items - All menu items
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<Item>>> {
    let items = state.db.items().list().await?;
    Ok(Json(items))
}

/// POST /api/items - Create an item, returns it with its new id
pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(new_item): ApiJson<NewItem>,
) -> ApiResult<Json<Item>> {
    let item = state.db.items().insert(&new_item).await?;
    info!(id = item.id, name = %item.name, "Item created");
    Ok(Json(item))
}

/// PUT /api/items/{id} - Overwrite name, price and type
pub async fn update_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(item): ApiJson<NewItem>,
) -> ApiResult<Json<MessageResponse>> {
    let affected = state.db.items().update(id, &item).await?;
    info!(id, affected, "Item updated");

    Ok(Json(MessageResponse {
        message: "Item updated successfully",
    }))
}

/// DELETE /api/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let affected = state.db.items().delete(id).await?;
    info!(id, affected, "Item deleted");

    Ok(Json(MessageResponse {
        message: "Item deleted successfully",
    }))
}
