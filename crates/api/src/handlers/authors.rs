//! Handlers for the author collection.

use axum::extract::State;
use folio_core::sort::SortOptions;

use crate::error::{AppError, AppResult};
use crate::response::AuthorList;
use crate::state::AppState;

/// GET /authors
///
/// List every author ordered by family name, ascending. An empty or absent
/// result is answered with the plain-text "no authors" message.
pub async fn list_authors(State(state): State<AppState>) -> AppResult<AuthorList> {
    let sort = SortOptions::family_name_ascending();

    let authors = state
        .authors
        .get_all_authors(&sort)
        .await
        .map_err(AppError::AuthorLookup)?;

    let list = AuthorList::from(authors);
    if let AuthorList::Found(authors) = &list {
        tracing::debug!(count = authors.len(), %sort, "Listed authors");
    }

    Ok(list)
}
