//! # fleet-core
//!
//! Core crate for the fleet API. Contains configuration schemas, the unified
//! error system, pagination/sorting/filter types, and the generic list-query
//! pipeline shared by every list endpoint.
//!
//! This crate has **no** internal dependencies on other fleet crates.

pub mod config;
pub mod error;
pub mod query;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
