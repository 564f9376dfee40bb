//! Truck entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A truck, optionally assigned to a driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Truck {
    /// Unique truck identifier.
    pub truck_id: i64,
    /// Fleet unit number (unique).
    pub unit_number: String,
    /// Vehicle identification number (unique when set).
    pub vin: Option<String>,
    /// License plate.
    pub plate_number: Option<String>,
    /// Assigned driver, if any.
    pub driver_id: Option<i64>,
    /// Deactivated trucks stay in the table with this flag cleared.
    pub is_active: bool,
    /// When the truck was created.
    pub created_at: DateTime<Utc>,
    /// When the truck was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new truck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTruck {
    /// Fleet unit number.
    pub unit_number: String,
    /// Vehicle identification number.
    pub vin: Option<String>,
    /// License plate.
    pub plate_number: Option<String>,
    /// Driver to assign.
    pub driver_id: Option<i64>,
}

/// Full set of mutable truck fields written by an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTruck {
    /// Truck to update.
    pub truck_id: i64,
    pub unit_number: String,
    pub vin: Option<String>,
    pub plate_number: Option<String>,
    pub driver_id: Option<i64>,
    pub is_active: bool,
}

impl Truck {
    /// Start an update from the current values of this truck.
    pub fn to_update(&self) -> UpdateTruck {
        UpdateTruck {
            truck_id: self.truck_id,
            unit_number: self.unit_number.clone(),
            vin: self.vin.clone(),
            plate_number: self.plate_number.clone(),
            driver_id: self.driver_id,
            is_active: self.is_active,
        }
    }
}
