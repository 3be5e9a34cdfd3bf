//! Row and DTO types for each table.

pub mod author;
