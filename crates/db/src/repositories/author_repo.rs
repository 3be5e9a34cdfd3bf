//! Repository for the `authors` table.

use folio_core::sort::{SortDirection, SortField, SortOptions};
use sqlx::PgPool;

use crate::models::author::{AuthorRow, CreateAuthor};

/// Column list for `authors` queries.
const COLUMNS: &str = "\
    id, first_name, last_name, date_of_birth, date_of_death, \
    created_at, updated_at";

/// Provides data access for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// List every author ordered by `sort`.
    ///
    /// Ties on the sort column fall back to first name, then id, so the
    /// result order is deterministic.
    pub async fn list_sorted(
        pool: &PgPool,
        sort: &SortOptions,
    ) -> Result<Vec<AuthorRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM authors ORDER BY {}",
            order_clause(sort)
        );
        sqlx::query_as::<_, AuthorRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a new author, returning the created row.
    pub async fn create(pool: &PgPool, dto: &CreateAuthor) -> Result<AuthorRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO authors (first_name, last_name, date_of_birth, date_of_death) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuthorRow>(&query)
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(dto.date_of_birth)
            .bind(dto.date_of_death)
            .fetch_one(pool)
            .await
    }
}

/// Column backing a sort field.
fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::FamilyName => "last_name",
    }
}

/// Build the `ORDER BY` body from a whitelisted column and direction.
pub(crate) fn order_clause(sort: &SortOptions) -> String {
    let direction = match sort.direction {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
    };
    format!(
        "{} {direction}, first_name ASC, id ASC",
        sort_column(sort.field)
    )
}
