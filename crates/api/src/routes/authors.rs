//! Route definitions for the author collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::authors;
use crate::state::AppState;

/// Author routes mounted at `/authors`.
///
/// ```text
/// GET    /                  -> list_authors
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(authors::list_authors))
}
