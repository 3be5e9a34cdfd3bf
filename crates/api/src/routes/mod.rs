pub mod authors;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /authors                                         list (sorted by family name)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/authors", authors::router())
}
