//! Health check route

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::error;

use pizzeria_db::migrations;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub migrations: MigrationHealth,
}

#[derive(Debug, Serialize)]
pub struct MigrationHealth {
    pub applied: usize,
    pub total: usize,
}

/// GET /api/health - Liveness of the server and its database
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    state.db.ping().await.map_err(|e| {
        error!(error = %e, "Database ping failed");
        ApiError::Unavailable
    })?;

    let (total, applied) = migrations::migration_status(state.db.pool())
        .await
        .map_err(|e| {
            error!(error = %e, "Could not read migration status");
            ApiError::Unavailable
        })?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        migrations: MigrationHealth { applied, total },
    }))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health_ok() {
        let (app, _db) = test_app().await;

        let (status, body) = get(&app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["migrations"]["applied"], body["migrations"]["total"]);
    }

    #[tokio::test]
    async fn test_health_after_close_is_503() {
        let (app, db) = test_app().await;
        db.close().await;

        let (status, body) = get(&app, "/api/health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "Database unavailable");
    }
}
