//! In-memory [`AuthorStore`], used by the `memory` backend and tests.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use folio_core::author::Author;
use folio_core::error::CoreError;
use folio_core::sort::{SortDirection, SortField, SortOptions};
use folio_core::store::AuthorStore;
use tokio::sync::RwLock;

/// In-memory implementation of the author store.
#[derive(Debug, Clone, Default)]
pub struct MemoryAuthorStore {
    authors: Arc<RwLock<Vec<Author>>>,
}

impl MemoryAuthorStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with initial data, in insertion order.
    pub fn with_data(authors: Vec<Author>) -> Self {
        Self {
            authors: Arc::new(RwLock::new(authors)),
        }
    }

    /// Creates a store seeded from a JSON array of authors.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let authors: Vec<Author> = serde_json::from_str(json)?;
        Ok(Self::with_data(authors))
    }
}

fn compare(a: &Author, b: &Author, sort: &SortOptions) -> Ordering {
    let primary = match sort.field {
        SortField::FamilyName => a.last_name.cmp(&b.last_name),
    };
    let primary = match sort.direction {
        SortDirection::Ascending => primary,
        SortDirection::Descending => primary.reverse(),
    };
    primary.then_with(|| a.first_name.cmp(&b.first_name))
}

#[async_trait]
impl AuthorStore for MemoryAuthorStore {
    async fn get_all_authors(
        &self,
        sort: &SortOptions,
    ) -> Result<Option<Vec<Author>>, CoreError> {
        let mut authors = self.authors.read().await.clone();
        // Stable: equal keys keep insertion order, matching the id tie-breaker in SQL.
        authors.sort_by(|a, b| compare(a, b, sort));
        Ok(Some(authors))
    }
}
