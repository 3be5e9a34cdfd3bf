use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;

use crate::response::NO_AUTHORS_FOUND;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`]; this is the one place internal failures are
/// logged before being turned into a sanitized client response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The author store failed to answer a list query.
    #[error("Author lookup failed: {0}")]
    AuthorLookup(#[source] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::AuthorLookup(err) => {
                tracing::error!(error = %err, "Failed to fetch authors");
                // The caller gets the same text as the empty case, never the cause.
                (StatusCode::INTERNAL_SERVER_ERROR, NO_AUTHORS_FOUND).into_response()
            }
        }
    }
}
