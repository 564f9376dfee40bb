//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use fleet_core::types::PageRequest;
use fleet_entity::driver::CreateDriver;
use fleet_entity::truck::CreateTruck;
use fleet_service::{DriverPatch, ListParams, TruckPatch};

/// Create driver request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDriverRequest {
    /// Full name.
    #[validate(length(min = 1, max = 255))]
    pub driver_name: String,
}

impl From<CreateDriverRequest> for CreateDriver {
    fn from(req: CreateDriverRequest) -> Self {
        Self {
            driver_name: req.driver_name,
        }
    }
}

/// Update driver request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    /// New name.
    #[validate(length(min = 1, max = 255))]
    pub driver_name: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

impl From<UpdateDriverRequest> for DriverPatch {
    fn from(req: UpdateDriverRequest) -> Self {
        Self {
            driver_name: req.driver_name,
            is_active: req.is_active,
        }
    }
}

/// Create truck request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTruckRequest {
    /// Fleet unit number.
    #[validate(length(min = 1, max = 50))]
    pub unit_number: String,
    /// Vehicle identification number.
    #[validate(length(max = 50))]
    pub vin: Option<String>,
    /// License plate.
    #[validate(length(max = 50))]
    pub plate_number: Option<String>,
    /// Driver to assign.
    pub driver_id: Option<i64>,
}

impl From<CreateTruckRequest> for CreateTruck {
    fn from(req: CreateTruckRequest) -> Self {
        Self {
            unit_number: req.unit_number,
            vin: req.vin,
            plate_number: req.plate_number,
            driver_id: req.driver_id,
        }
    }
}

/// Update truck request.
///
/// `vin`, `plate_number` and `driver_id` distinguish an absent key from an
/// explicit `null`, which clears the value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTruckRequest {
    #[validate(length(min = 1, max = 50))]
    pub unit_number: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 50))]
    pub vin: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 50))]
    pub plate_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub driver_id: Option<Option<i64>>,
    pub is_active: Option<bool>,
}

impl From<UpdateTruckRequest> for TruckPatch {
    fn from(req: UpdateTruckRequest) -> Self {
        Self {
            unit_number: req.unit_number,
            vin: req.vin,
            plate_number: req.plate_number,
            driver_id: req.driver_id,
            is_active: req.is_active,
        }
    }
}

/// Marks a key as present; combined with `#[serde(default)]` an absent key
/// stays `None` while `null` becomes `Some(None)`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query string of `GET /drivers`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DriverListQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: i64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 200))]
    pub page_size: i64,
    #[validate(length(min = 1, max = 100))]
    pub search: Option<String>,
    pub is_active: Option<bool>,
    /// Comma-separated fields, `-` prefix for descending, e.g.
    /// `driver_name,-created_at`.
    #[validate(length(max = 200))]
    pub sort: Option<String>,
}

impl From<DriverListQuery> for ListParams {
    fn from(query: DriverListQuery) -> Self {
        Self {
            page: PageRequest::new(query.page, query.page_size),
            search: query.search,
            is_active: query.is_active,
            sort: query.sort,
        }
    }
}

/// Query string of `GET /trucks`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TruckListQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: i64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 200))]
    pub page_size: i64,
    #[validate(length(min = 1, max = 100))]
    pub search: Option<String>,
    pub driver_id: Option<i64>,
    pub is_active: Option<bool>,
    /// e.g. `unit_number,-created_at`.
    #[validate(length(max = 200))]
    pub sort: Option<String>,
}

impl TruckListQuery {
    /// Split into the shared list parameters and the driver filter.
    pub fn into_parts(self) -> (ListParams, Option<i64>) {
        let params = ListParams {
            page: PageRequest::new(self.page, self.page_size),
            search: self.search,
            is_active: self.is_active,
            sort: self.sort,
        };
        (params, self.driver_id)
    }
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    fleet_core::types::pagination::DEFAULT_PAGE_SIZE
}
