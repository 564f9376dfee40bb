//! # fleet-service
//!
//! Business logic for drivers and trucks. Services own `Arc` handles to
//! their repositories and receive a [`RequestContext`] on every call so that
//! log lines carry the request id.

pub mod context;
pub mod driver;
pub mod list;
pub mod truck;

pub use context::RequestContext;
pub use driver::{DriverPatch, DriverService};
pub use list::ListParams;
pub use truck::{TruckPatch, TruckService};
