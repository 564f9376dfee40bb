//! Truck management.

pub mod service;

pub use service::{TruckPatch, TruckService};
