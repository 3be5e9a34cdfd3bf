//! Author domain record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An author as exposed by the catalogue.
///
/// `date_of_death` is omitted from the serialized form when unset, so a
/// living author serializes with exactly three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Build a living author.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            date_of_death: None,
        }
    }

    /// Set the date of death.
    pub fn died(mut self, date_of_death: NaiveDate) -> Self {
        self.date_of_death = Some(date_of_death);
        self
    }
}
