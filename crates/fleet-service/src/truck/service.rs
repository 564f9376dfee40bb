//! Truck CRUD and listing.
//!
//! Unit numbers and VINs are unique, and an assigned driver must exist. Both
//! rules are checked before writing and enforced again by the schema.

use std::sync::Arc;

use tracing::info;

use fleet_core::error::AppError;
use fleet_core::query::list_page;
use fleet_core::types::{FilterCondition, PageResponse};
use fleet_database::repositories::{DriverRepository, TruckRepository};
use fleet_entity::truck::{
    CreateTruck, TRUCK_SEARCH_COLUMNS, TRUCK_SORT, Truck, TruckColumn, UpdateTruck,
};

use crate::context::RequestContext;
use crate::list::ListParams;

/// Partial update of a truck.
///
/// For the nullable fields the outer `Option` says whether the field was
/// given, the inner one whether it is being cleared.
#[derive(Debug, Clone, Default)]
pub struct TruckPatch {
    pub unit_number: Option<String>,
    pub vin: Option<Option<String>>,
    pub plate_number: Option<Option<String>>,
    pub driver_id: Option<Option<i64>>,
    pub is_active: Option<bool>,
}

impl TruckPatch {
    /// Merge the present fields over `current`.
    pub fn apply(self, current: &Truck) -> UpdateTruck {
        let mut update = current.to_update();
        if let Some(unit_number) = self.unit_number {
            update.unit_number = unit_number;
        }
        if let Some(vin) = self.vin {
            update.vin = vin;
        }
        if let Some(plate_number) = self.plate_number {
            update.plate_number = plate_number;
        }
        if let Some(driver_id) = self.driver_id {
            update.driver_id = driver_id;
        }
        if let Some(active) = self.is_active {
            update.is_active = active;
        }
        update
    }
}

/// Handles truck operations.
#[derive(Debug, Clone)]
pub struct TruckService {
    truck_repo: Arc<TruckRepository>,
    driver_repo: Arc<DriverRepository>,
}

impl TruckService {
    /// Creates a new truck service.
    pub fn new(truck_repo: Arc<TruckRepository>, driver_repo: Arc<DriverRepository>) -> Self {
        Self {
            truck_repo,
            driver_repo,
        }
    }

    /// Creates an active truck.
    pub async fn create(&self, ctx: &RequestContext, data: CreateTruck) -> Result<Truck, AppError> {
        if let Some(driver_id) = data.driver_id {
            self.ensure_driver_exists(driver_id).await?;
        }
        self.ensure_unit_number_free(&data.unit_number, None).await?;
        if let Some(vin) = &data.vin {
            self.ensure_vin_free(vin, None).await?;
        }

        let truck = self.truck_repo.create(&data).await?;

        info!(
            request_id = %ctx.request_id,
            truck_id = truck.truck_id,
            unit_number = %truck.unit_number,
            driver_id = ?truck.driver_id,
            "Truck created"
        );

        Ok(truck)
    }

    /// Gets a single truck by id.
    pub async fn get(&self, truck_id: i64) -> Result<Truck, AppError> {
        self.truck_repo
            .find_by_id(truck_id)
            .await?
            .ok_or_else(|| AppError::not_found("Truck not found"))
    }

    /// Applies a partial update.
    ///
    /// Uniqueness is only re-checked for values that actually change.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        truck_id: i64,
        patch: TruckPatch,
    ) -> Result<Truck, AppError> {
        let current = self.get(truck_id).await?;
        let update = patch.apply(&current);

        if let Some(driver_id) = update.driver_id {
            if current.driver_id != Some(driver_id) {
                self.ensure_driver_exists(driver_id).await?;
            }
        }
        if update.unit_number != current.unit_number {
            self.ensure_unit_number_free(&update.unit_number, Some(truck_id))
                .await?;
        }
        if let Some(vin) = &update.vin {
            if current.vin.as_ref() != Some(vin) {
                self.ensure_vin_free(vin, Some(truck_id)).await?;
            }
        }

        let truck = self.truck_repo.update(&update).await?;

        info!(
            request_id = %ctx.request_id,
            truck_id,
            driver_id = ?truck.driver_id,
            is_active = truck.is_active,
            "Truck updated"
        );

        Ok(truck)
    }

    /// Marks a truck inactive and returns it.
    pub async fn deactivate(&self, ctx: &RequestContext, truck_id: i64) -> Result<Truck, AppError> {
        let truck = self.truck_repo.deactivate(truck_id).await?;

        info!(request_id = %ctx.request_id, truck_id, "Truck deactivated");

        Ok(truck)
    }

    /// Lists trucks one page at a time, optionally for one driver.
    pub async fn list(
        &self,
        params: ListParams,
        driver_id: Option<i64>,
    ) -> Result<PageResponse<Truck>, AppError> {
        list_page(
            self.truck_repo.as_ref(),
            truck_filters(&params, driver_id),
            params.sort.as_deref(),
            &TRUCK_SORT,
            params.page,
        )
        .await
    }

    async fn ensure_driver_exists(&self, driver_id: i64) -> Result<(), AppError> {
        if self.driver_repo.exists(driver_id).await? {
            Ok(())
        } else {
            Err(AppError::bad_request("driver_id does not exist"))
        }
    }

    async fn ensure_unit_number_free(
        &self,
        unit_number: &str,
        own_id: Option<i64>,
    ) -> Result<(), AppError> {
        match self.truck_repo.find_by_unit_number(unit_number).await? {
            Some(other) if Some(other.truck_id) != own_id => {
                Err(AppError::conflict("unit_number already exists"))
            }
            _ => Ok(()),
        }
    }

    async fn ensure_vin_free(&self, vin: &str, own_id: Option<i64>) -> Result<(), AppError> {
        match self.truck_repo.find_by_vin(vin).await? {
            Some(other) if Some(other.truck_id) != own_id => {
                Err(AppError::conflict("vin already exists"))
            }
            _ => Ok(()),
        }
    }
}

/// `is_active` and `driver_id` equality plus search over unit number, VIN
/// and plate.
pub fn truck_filters(params: &ListParams, driver_id: Option<i64>) -> Vec<FilterCondition<TruckColumn>> {
    let mut filters = params.filters(TruckColumn::IsActive, TRUCK_SEARCH_COLUMNS);
    if let Some(driver_id) = driver_id {
        filters.push(FilterCondition::eq(TruckColumn::DriverId, driver_id));
    }
    filters
}
