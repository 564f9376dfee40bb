//! Truck handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{CreateTruckRequest, TruckListQuery, UpdateTruckRequest};
use crate::dto::response::{PaginatedResponse, TruckResponse, page_of};
use crate::error::ApiError;
use crate::extractors::{CurrentRequest, IdPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// POST /trucks
pub async fn create_truck(
    State(state): State<AppState>,
    ctx: CurrentRequest,
    ValidatedJson(req): ValidatedJson<CreateTruckRequest>,
) -> Result<(StatusCode, Json<TruckResponse>), ApiError> {
    let truck = state.truck_service.create(&ctx, req.into()).await?;
    Ok((StatusCode::CREATED, Json(truck.into())))
}

/// GET /trucks
pub async fn list_trucks(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<TruckListQuery>,
) -> Result<Json<PaginatedResponse<TruckResponse>>, ApiError> {
    let (params, driver_id) = query.into_parts();
    let page = state.truck_service.list(params, driver_id).await?;
    Ok(Json(page_of(page)))
}

/// GET /trucks/{truck_id}
pub async fn get_truck(
    State(state): State<AppState>,
    IdPath(truck_id): IdPath,
) -> Result<Json<TruckResponse>, ApiError> {
    let truck = state.truck_service.get(truck_id).await?;
    Ok(Json(truck.into()))
}

/// PATCH /trucks/{truck_id}
pub async fn update_truck(
    State(state): State<AppState>,
    ctx: CurrentRequest,
    IdPath(truck_id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateTruckRequest>,
) -> Result<Json<TruckResponse>, ApiError> {
    let truck = state
        .truck_service
        .update(&ctx, truck_id, req.into())
        .await?;
    Ok(Json(truck.into()))
}

/// DELETE /trucks/{truck_id}
pub async fn deactivate_truck(
    State(state): State<AppState>,
    ctx: CurrentRequest,
    IdPath(truck_id): IdPath,
) -> Result<Json<TruckResponse>, ApiError> {
    let truck = state.truck_service.deactivate(&ctx, truck_id).await?;
    Ok(Json(truck.into()))
}
