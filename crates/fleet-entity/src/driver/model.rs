//! Driver entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A driver in the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Driver {
    /// Unique driver identifier.
    pub driver_id: i64,
    /// Full name.
    pub driver_name: String,
    /// Deactivated drivers stay in the table with this flag cleared.
    pub is_active: bool,
    /// When the driver was created.
    pub created_at: DateTime<Utc>,
    /// When the driver was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDriver {
    /// Full name.
    pub driver_name: String,
}

/// Full set of mutable driver fields written by an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDriver {
    /// Driver to update.
    pub driver_id: i64,
    /// New name.
    pub driver_name: String,
    /// New active flag.
    pub is_active: bool,
}

impl Driver {
    /// Start an update from the current values of this driver.
    pub fn to_update(&self) -> UpdateDriver {
        UpdateDriver {
            driver_id: self.driver_id,
            driver_name: self.driver_name.clone(),
            is_active: self.is_active,
        }
    }
}
