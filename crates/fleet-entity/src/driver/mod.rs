//! Driver domain entities.

pub mod column;
pub mod model;

pub use column::{DRIVER_SEARCH_COLUMNS, DRIVER_SORT, DRIVER_SORT_FIELDS, DriverColumn};
pub use model::{CreateDriver, Driver, UpdateDriver};
