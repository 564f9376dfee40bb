//! # fleet-database
//!
//! PostgreSQL connection management, schema migrations, and the driver and
//! truck repositories. Both repositories implement
//! [`fleet_core::traits::Collection`], so list endpoints run the shared
//! pipeline directly against the database.

pub mod connection;
pub mod listing;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{DriverRepository, TruckRepository};
