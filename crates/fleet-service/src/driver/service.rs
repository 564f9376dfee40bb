//! Driver CRUD and listing.

use std::sync::Arc;

use tracing::info;

use fleet_core::error::AppError;
use fleet_core::query::list_page;
use fleet_core::types::{FilterCondition, PageResponse};
use fleet_database::repositories::DriverRepository;
use fleet_entity::driver::{
    CreateDriver, DRIVER_SEARCH_COLUMNS, DRIVER_SORT, Driver, DriverColumn, UpdateDriver,
};

use crate::context::RequestContext;
use crate::list::ListParams;

/// Partial update of a driver. Absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct DriverPatch {
    /// New name.
    pub driver_name: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

impl DriverPatch {
    /// Merge the present fields over `current`.
    pub fn apply(self, current: &Driver) -> UpdateDriver {
        let mut update = current.to_update();
        if let Some(name) = self.driver_name {
            update.driver_name = name;
        }
        if let Some(active) = self.is_active {
            update.is_active = active;
        }
        update
    }
}

/// Handles driver operations.
#[derive(Debug, Clone)]
pub struct DriverService {
    driver_repo: Arc<DriverRepository>,
}

impl DriverService {
    /// Creates a new driver service.
    pub fn new(driver_repo: Arc<DriverRepository>) -> Self {
        Self { driver_repo }
    }

    /// Creates an active driver.
    pub async fn create(&self, ctx: &RequestContext, data: CreateDriver) -> Result<Driver, AppError> {
        let driver = self.driver_repo.create(&data).await?;

        info!(
            request_id = %ctx.request_id,
            driver_id = driver.driver_id,
            "Driver created"
        );

        Ok(driver)
    }

    /// Gets a single driver by id.
    pub async fn get(&self, driver_id: i64) -> Result<Driver, AppError> {
        self.driver_repo
            .find_by_id(driver_id)
            .await?
            .ok_or_else(|| AppError::not_found("Driver not found"))
    }

    /// Applies a partial update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        driver_id: i64,
        patch: DriverPatch,
    ) -> Result<Driver, AppError> {
        let current = self.get(driver_id).await?;
        let driver = self.driver_repo.update(&patch.apply(&current)).await?;

        info!(
            request_id = %ctx.request_id,
            driver_id,
            is_active = driver.is_active,
            "Driver updated"
        );

        Ok(driver)
    }

    /// Marks a driver inactive and returns it.
    pub async fn deactivate(&self, ctx: &RequestContext, driver_id: i64) -> Result<Driver, AppError> {
        let driver = self.driver_repo.deactivate(driver_id).await?;

        info!(request_id = %ctx.request_id, driver_id, "Driver deactivated");

        Ok(driver)
    }

    /// Lists drivers one page at a time.
    pub async fn list(&self, params: ListParams) -> Result<PageResponse<Driver>, AppError> {
        list_page(
            self.driver_repo.as_ref(),
            driver_filters(&params),
            params.sort.as_deref(),
            &DRIVER_SORT,
            params.page,
        )
        .await
    }
}

/// `is_active` equality and name search.
pub fn driver_filters(params: &ListParams) -> Vec<FilterCondition<DriverColumn>> {
    params.filters(DriverColumn::IsActive, DRIVER_SEARCH_COLUMNS)
}
