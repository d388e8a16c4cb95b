//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// The engine itself never fails on numbers; these cover what the host
/// surface can reject (bad line references, malformed requests).
#[derive(Debug, Error)]
pub enum AppError {
    /// Request could not be understood.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request referenced a line that does not exist.
    #[error("Line not found: {0}")]
    LineNotFound(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::LineNotFound(_) => 422,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::LineNotFound(_) => "LINE_NOT_FOUND",
        }
    }
}
