//! Author models and DTOs.

use chrono::NaiveDate;
use folio_core::author::Author;
use folio_core::types::{DbId, Timestamp};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `authors` table.
#[derive(Debug, Clone, FromRow)]
pub struct AuthorRow {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author {
            first_name: row.first_name,
            last_name: row.last_name,
            date_of_birth: row.date_of_birth,
            date_of_death: row.date_of_death,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for inserting a new author.
#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
}

impl From<&Author> for CreateAuthor {
    fn from(author: &Author) -> Self {
        CreateAuthor {
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            date_of_birth: author.date_of_birth,
            date_of_death: author.date_of_death,
        }
    }
}
