//! Mapping of application errors onto HTTP responses.

use aklatan_shared::{AppError, types::PaginationError};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Handler error, rendered as a bare status page.
///
/// Causes are logged by the handler that raised them; the response only
/// carries the status.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<PaginationError> for ApiError {
    fn from(err: PaginationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let reason = status.canonical_reason().unwrap_or("Error");

        (status, Html(format!("<h1>{} {reason}</h1>", status.as_u16()))).into_response()
    }
}
