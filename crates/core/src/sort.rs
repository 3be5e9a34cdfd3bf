//! Sort specification for author listings.
//!
//! A sort is a single key/value pair: the field to order by and a direction
//! of `1` (ascending) or `-1` (descending), rendered as `family_name:1`.

use std::fmt;

/// Author fields a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// The author's family name (stored as `last_name`).
    FamilyName,
}

impl SortField {
    /// Key used in sort specifications.
    pub fn key(self) -> &'static str {
        match self {
            SortField::FamilyName => "family_name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// `1` for ascending, `-1` for descending.
    pub fn as_i8(self) -> i8 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOptions {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOptions {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// The fixed ordering used by the author list endpoint: `{ family_name: 1 }`.
    pub fn family_name_ascending() -> Self {
        Self::new(SortField::FamilyName, SortDirection::Ascending)
    }

    /// The specification as a `(key, direction)` pair.
    pub fn as_pair(&self) -> (&'static str, i8) {
        (self.field.key(), self.direction.as_i8())
    }
}

impl fmt::Display for SortOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key, direction) = self.as_pair();
        write!(f, "{key}:{direction}")
    }
}
