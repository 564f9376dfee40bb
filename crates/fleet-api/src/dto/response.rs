//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fleet_core::types::PageResponse;
use fleet_entity::driver::Driver;
use fleet_entity::truck::Truck;

/// `GET /health` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// `GET /db-health` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbHealthResponse {
    pub db: String,
}

/// Driver as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverResponse {
    pub driver_id: i64,
    pub driver_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Driver> for DriverResponse {
    fn from(d: Driver) -> Self {
        Self {
            driver_id: d.driver_id,
            driver_name: d.driver_name,
            is_active: d.is_active,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// Truck as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruckResponse {
    pub truck_id: i64,
    pub unit_number: String,
    pub vin: Option<String>,
    pub plate_number: Option<String>,
    pub driver_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Truck> for TruckResponse {
    fn from(t: Truck) -> Self {
        Self {
            truck_id: t.truck_id,
            unit_number: t.unit_number,
            vin: t.vin,
            plate_number: t.plate_number,
            driver_id: t.driver_id,
            is_active: t.is_active,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// One page of results with its pagination metadata.
pub type PaginatedResponse<T> = PageResponse<T>;

/// Convert every item of a page into its response DTO.
pub fn page_of<T, R: From<T>>(page: PageResponse<T>) -> PaginatedResponse<R> {
    page.map(R::from)
}
