//! # fleet-api
//!
//! HTTP API layer for the fleet service built on Axum.
//!
//! Provides the driver, truck and health endpoints, the middleware stack
//! (request ids, tracing, CORS, timeouts, request logging), validating
//! extractors, DTOs, and the mapping from [`fleet_core::AppError`] to HTTP
//! responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
