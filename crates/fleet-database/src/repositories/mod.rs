//! Concrete repository implementations.

pub mod driver;
pub mod truck;

pub use driver::DriverRepository;
pub use truck::TruckRepository;
