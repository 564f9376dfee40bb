//! Application state shared across all handlers.

use std::sync::Arc;

use fleet_core::config::AppConfig;
use fleet_database::{DatabasePool, DriverRepository, TruckRepository};
use fleet_service::{DriverService, TruckService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db: DatabasePool,
    /// Driver service
    pub driver_service: Arc<DriverService>,
    /// Truck service
    pub truck_service: Arc<TruckService>,
}

impl AppState {
    /// Wire repositories and services over `db`.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let driver_repo = Arc::new(DriverRepository::new(db.pool().clone()));
        let truck_repo = Arc::new(TruckRepository::new(db.pool().clone()));

        let driver_service = Arc::new(DriverService::new(Arc::clone(&driver_repo)));
        let truck_service = Arc::new(TruckService::new(truck_repo, driver_repo));

        Self {
            config: Arc::new(config),
            db,
            driver_service,
            truck_service,
        }
    }
}
