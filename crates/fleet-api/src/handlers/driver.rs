//! Driver handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{CreateDriverRequest, DriverListQuery, UpdateDriverRequest};
use crate::dto::response::{DriverResponse, PaginatedResponse, page_of};
use crate::error::ApiError;
use crate::extractors::{CurrentRequest, IdPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// POST /drivers
pub async fn create_driver(
    State(state): State<AppState>,
    ctx: CurrentRequest,
    ValidatedJson(req): ValidatedJson<CreateDriverRequest>,
) -> Result<(StatusCode, Json<DriverResponse>), ApiError> {
    let driver = state.driver_service.create(&ctx, req.into()).await?;
    Ok((StatusCode::CREATED, Json(driver.into())))
}

/// GET /drivers
pub async fn list_drivers(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<DriverListQuery>,
) -> Result<Json<PaginatedResponse<DriverResponse>>, ApiError> {
    let page = state.driver_service.list(query.into()).await?;
    Ok(Json(page_of(page)))
}

/// GET /drivers/{driver_id}
pub async fn get_driver(
    State(state): State<AppState>,
    IdPath(driver_id): IdPath,
) -> Result<Json<DriverResponse>, ApiError> {
    let driver = state.driver_service.get(driver_id).await?;
    Ok(Json(driver.into()))
}

/// PATCH /drivers/{driver_id}
pub async fn update_driver(
    State(state): State<AppState>,
    ctx: CurrentRequest,
    IdPath(driver_id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateDriverRequest>,
) -> Result<Json<DriverResponse>, ApiError> {
    let driver = state
        .driver_service
        .update(&ctx, driver_id, req.into())
        .await?;
    Ok(Json(driver.into()))
}

/// DELETE /drivers/{driver_id}
pub async fn deactivate_driver(
    State(state): State<AppState>,
    ctx: CurrentRequest,
    IdPath(driver_id): IdPath,
) -> Result<Json<DriverResponse>, ApiError> {
    let driver = state.driver_service.deactivate(&ctx, driver_id).await?;
    Ok(Json(driver.into()))
}
