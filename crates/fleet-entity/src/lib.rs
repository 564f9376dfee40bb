//! # fleet-entity
//!
//! Domain entity models for the fleet API. Every struct here represents a
//! database row or the data needed to write one. Each entity also declares
//! its column keys, sort allow-list, and free-text search columns.

pub mod driver;
pub mod truck;
