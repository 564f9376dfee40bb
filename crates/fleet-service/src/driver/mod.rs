//! Driver management.

pub mod service;

pub use service::{DriverPatch, DriverService};
