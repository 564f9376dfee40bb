//! Route definitions for the fleet HTTP API.

use axum::Router;
use axum::routing::get;

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route group and thread `state` through it.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(driver_routes())
        .merge(truck_routes())
        .with_state(state)
}

/// Liveness and database connectivity
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/db-health", get(handlers::health::db_health))
}

/// Driver CRUD and listing
fn driver_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/drivers",
            get(handlers::driver::list_drivers).post(handlers::driver::create_driver),
        )
        .route(
            "/drivers/{driver_id}",
            get(handlers::driver::get_driver)
                .patch(handlers::driver::update_driver)
                .delete(handlers::driver::deactivate_driver),
        )
}

/// Truck CRUD and listing
fn truck_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/trucks",
            get(handlers::truck::list_trucks).post(handlers::truck::create_truck),
        )
        .route(
            "/trucks/{truck_id}",
            get(handlers::truck::get_truck)
                .patch(handlers::truck::update_truck)
                .delete(handlers::truck::deactivate_truck),
        )
}
