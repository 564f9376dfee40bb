//! Truck repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use fleet_core::error::{AppError, ErrorKind};
use fleet_core::query::ListQuery;
use fleet_core::result::AppResult;
use fleet_core::traits::Collection;
use fleet_core::types::FilterCondition;
use fleet_entity::truck::{CreateTruck, Truck, TruckColumn, UpdateTruck};

use crate::listing::{count_query, select_query};

const TABLE: &str = "trucks";

const UNIT_NUMBER_KEY: &str = "trucks_unit_number_key";
const VIN_KEY: &str = "trucks_vin_key";
const DRIVER_FKEY: &str = "trucks_driver_id_fkey";

/// Repository for truck CRUD and list queries.
#[derive(Debug, Clone)]
pub struct TruckRepository {
    pool: PgPool,
}

impl TruckRepository {
    /// Create a new truck repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a truck by primary key.
    pub async fn find_by_id(&self, truck_id: i64) -> AppResult<Option<Truck>> {
        sqlx::query_as::<_, Truck>("SELECT * FROM trucks WHERE truck_id = $1")
            .bind(truck_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find truck by id", e)
            })
    }

    /// Find a truck by its unit number.
    pub async fn find_by_unit_number(&self, unit_number: &str) -> AppResult<Option<Truck>> {
        sqlx::query_as::<_, Truck>("SELECT * FROM trucks WHERE unit_number = $1")
            .bind(unit_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find truck by unit number", e)
            })
    }

    /// Find a truck by VIN.
    pub async fn find_by_vin(&self, vin: &str) -> AppResult<Option<Truck>> {
        sqlx::query_as::<_, Truck>("SELECT * FROM trucks WHERE vin = $1")
            .bind(vin)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find truck by vin", e))
    }

    /// Insert a new active truck.
    pub async fn create(&self, data: &CreateTruck) -> AppResult<Truck> {
        sqlx::query_as::<_, Truck>(
            "INSERT INTO trucks (unit_number, vin, plate_number, driver_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.unit_number)
        .bind(&data.vin)
        .bind(&data.plate_number)
        .bind(data.driver_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create truck"))
    }

    /// Write every mutable field and refresh `updated_at`.
    pub async fn update(&self, data: &UpdateTruck) -> AppResult<Truck> {
        sqlx::query_as::<_, Truck>(
            "UPDATE trucks SET unit_number = $2, vin = $3, plate_number = $4, \
                               driver_id = $5, is_active = $6, updated_at = NOW() \
             WHERE truck_id = $1 RETURNING *",
        )
        .bind(data.truck_id)
        .bind(&data.unit_number)
        .bind(&data.vin)
        .bind(&data.plate_number)
        .bind(data.driver_id)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update truck"))?
        .ok_or_else(|| AppError::not_found("Truck not found"))
    }

    /// Clear the active flag. The row is kept.
    pub async fn deactivate(&self, truck_id: i64) -> AppResult<Truck> {
        sqlx::query_as::<_, Truck>(
            "UPDATE trucks SET is_active = FALSE, updated_at = NOW() \
             WHERE truck_id = $1 RETURNING *",
        )
        .bind(truck_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to deactivate truck", e))?
        .ok_or_else(|| AppError::not_found("Truck not found"))
    }
}

/// Constraint violations that slipped past the service checks, e.g. two
/// concurrent inserts of the same unit number.
fn map_write_error(e: sqlx::Error, context: &'static str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(UNIT_NUMBER_KEY) => {
            AppError::conflict("unit_number already exists")
        }
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(VIN_KEY) => {
            AppError::conflict("vin already exists")
        }
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(DRIVER_FKEY) => {
            AppError::bad_request("driver_id does not exist")
        }
        _ => AppError::with_source(ErrorKind::Database, context, e),
    }
}

#[async_trait]
impl Collection<TruckColumn> for TruckRepository {
    type Item = Truck;

    async fn count(&self, filters: &[FilterCondition<TruckColumn>]) -> AppResult<i64> {
        let mut builder = count_query(TABLE, filters);
        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count trucks", e))
    }

    async fn fetch(&self, query: &ListQuery<TruckColumn>) -> AppResult<Vec<Truck>> {
        let mut builder = select_query(TABLE, query);
        builder
            .build_query_as::<Truck>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list trucks", e))
    }
}
