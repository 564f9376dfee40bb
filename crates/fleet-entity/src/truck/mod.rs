//! Truck domain entities.

pub mod column;
pub mod model;

pub use column::{TRUCK_SEARCH_COLUMNS, TRUCK_SORT, TRUCK_SORT_FIELDS, TruckColumn};
pub use model::{CreateTruck, Truck, UpdateTruck};
