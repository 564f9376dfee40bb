//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{DbHealthResponse, HealthResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /db-health
pub async fn db_health(State(state): State<AppState>) -> Result<Json<DbHealthResponse>, ApiError> {
    state.db.health_check().await?;
    Ok(Json(DbHealthResponse {
        db: "ok".to_string(),
    }))
}
