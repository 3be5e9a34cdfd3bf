//! Postgres-backed [`AuthorStore`].

use async_trait::async_trait;
use folio_core::author::Author;
use folio_core::error::CoreError;
use folio_core::sort::SortOptions;
use folio_core::store::AuthorStore;

use crate::repositories::AuthorRepo;
use crate::DbPool;

/// Serves author queries from the `authors` table.
#[derive(Debug, Clone)]
pub struct PgAuthorStore {
    pool: DbPool,
}

impl PgAuthorStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorStore for PgAuthorStore {
    async fn get_all_authors(
        &self,
        sort: &SortOptions,
    ) -> Result<Option<Vec<Author>>, CoreError> {
        let rows = AuthorRepo::list_sorted(&self.pool, sort)
            .await
            .map_err(|e| CoreError::DataAccess(e.to_string()))?;

        tracing::debug!(count = rows.len(), %sort, "Fetched authors");

        Ok(Some(rows.into_iter().map(Author::from).collect()))
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| CoreError::DataAccess(e.to_string()))
    }
}
