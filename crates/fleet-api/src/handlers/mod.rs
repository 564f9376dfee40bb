//! HTTP request handlers.

pub mod driver;
pub mod health;
pub mod truck;
