//! Convenience result type alias.

use crate::error::AppError;

/// A specialized `Result` type for fleet operations.
pub type AppResult<T> = Result<T, AppError>;
