//! Core traits defined in `fleet-core` and implemented by other crates.

pub mod collection;
pub mod column;

pub use collection::Collection;
pub use column::SqlColumn;
