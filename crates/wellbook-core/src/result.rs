//! Convenience result type alias for Wellbook.

use crate::error::AppError;

/// A specialized `Result` type for Wellbook operations.
pub type AppResult<T> = Result<T, AppError>;
