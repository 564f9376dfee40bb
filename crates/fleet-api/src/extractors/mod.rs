//! Custom Axum extractors.

pub mod context;
pub mod path;
pub mod validated;

pub use context::CurrentRequest;
pub use path::IdPath;
pub use validated::{ValidatedJson, ValidatedQuery};
