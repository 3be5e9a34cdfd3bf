use std::sync::Arc;

use async_trait::async_trait;

use crate::author::Author;
use crate::error::CoreError;
use crate::sort::SortOptions;

/// Data-access capability for author records.
///
/// `get_all_authors` resolves to `Ok(None)` when the backend has no result
/// set at all, which callers treat the same as an empty list.
#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// Fetch every author, ordered by `sort`.
    async fn get_all_authors(&self, sort: &SortOptions)
        -> Result<Option<Vec<Author>>, CoreError>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

pub type AuthorStoreArc = Arc<dyn AuthorStore>;
