//! Driver repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use fleet_core::error::{AppError, ErrorKind};
use fleet_core::query::ListQuery;
use fleet_core::result::AppResult;
use fleet_core::traits::Collection;
use fleet_core::types::FilterCondition;
use fleet_entity::driver::{CreateDriver, Driver, DriverColumn, UpdateDriver};

use crate::listing::{count_query, select_query};

const TABLE: &str = "drivers";

/// Repository for driver CRUD and list queries.
#[derive(Debug, Clone)]
pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    /// Create a new driver repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a driver by primary key.
    pub async fn find_by_id(&self, driver_id: i64) -> AppResult<Option<Driver>> {
        sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE driver_id = $1")
            .bind(driver_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find driver by id", e)
            })
    }

    /// Whether a driver with this id exists, active or not.
    pub async fn exists(&self, driver_id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM drivers WHERE driver_id = $1)")
            .bind(driver_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check driver existence", e)
            })
    }

    /// Insert a new active driver.
    pub async fn create(&self, data: &CreateDriver) -> AppResult<Driver> {
        sqlx::query_as::<_, Driver>(
            "INSERT INTO drivers (driver_name) VALUES ($1) RETURNING *",
        )
        .bind(&data.driver_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create driver", e))
    }

    /// Write every mutable field and refresh `updated_at`.
    pub async fn update(&self, data: &UpdateDriver) -> AppResult<Driver> {
        sqlx::query_as::<_, Driver>(
            "UPDATE drivers SET driver_name = $2, is_active = $3, updated_at = NOW() \
             WHERE driver_id = $1 RETURNING *",
        )
        .bind(data.driver_id)
        .bind(&data.driver_name)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update driver", e))?
        .ok_or_else(|| AppError::not_found("Driver not found"))
    }

    /// Clear the active flag. The row is kept.
    pub async fn deactivate(&self, driver_id: i64) -> AppResult<Driver> {
        sqlx::query_as::<_, Driver>(
            "UPDATE drivers SET is_active = FALSE, updated_at = NOW() \
             WHERE driver_id = $1 RETURNING *",
        )
        .bind(driver_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to deactivate driver", e))?
        .ok_or_else(|| AppError::not_found("Driver not found"))
    }
}

#[async_trait]
impl Collection<DriverColumn> for DriverRepository {
    type Item = Driver;

    async fn count(&self, filters: &[FilterCondition<DriverColumn>]) -> AppResult<i64> {
        let mut builder = count_query(TABLE, filters);
        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count drivers", e))
    }

    async fn fetch(&self, query: &ListQuery<DriverColumn>) -> AppResult<Vec<Driver>> {
        let mut builder = select_query(TABLE, query);
        builder
            .build_query_as::<Driver>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list drivers", e))
    }
}
