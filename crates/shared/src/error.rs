//! Application-wide error types.

use thiserror::Error;

use crate::types::PaginationError;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request (e.g., a bad page number).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Configuration that loads but cannot be served.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Config(_) | Self::Database(_) | Self::Template(_) | Self::Internal(_) => 500,
        }
    }
}

impl From<PaginationError> for AppError {
    fn from(err: PaginationError) -> Self {
        match err {
            PaginationError::InvalidInput(reason) => Self::BadRequest(reason),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
