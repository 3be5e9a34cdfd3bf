//! Response shapes for the author collection.
//!
//! The author list is returned as a bare JSON array, not wrapped in an
//! envelope. An empty result is a plain-text message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_core::author::Author;

/// Body sent when there is nothing to list, and on lookup failure.
pub const NO_AUTHORS_FOUND: &str = "No authors found";

/// Successful outcome of an author list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorList {
    Found(Vec<Author>),
    Empty,
}

impl From<Option<Vec<Author>>> for AuthorList {
    /// `None` and `Some(vec![])` both collapse to [`AuthorList::Empty`].
    fn from(authors: Option<Vec<Author>>) -> Self {
        match authors {
            Some(authors) if !authors.is_empty() => AuthorList::Found(authors),
            _ => AuthorList::Empty,
        }
    }
}

impl IntoResponse for AuthorList {
    fn into_response(self) -> Response {
        match self {
            AuthorList::Found(authors) => (StatusCode::OK, Json(authors)).into_response(),
            AuthorList::Empty => (StatusCode::OK, NO_AUTHORS_FOUND).into_response(),
        }
    }
}
