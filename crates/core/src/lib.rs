//! Domain types shared by the Folio crates.
//!
//! Holds the author record, sort specification, and the [`store::AuthorStore`]
//! data-access seam that the API layer depends on.

pub mod author;
pub mod error;
pub mod sort;
pub mod store;
pub mod types;
