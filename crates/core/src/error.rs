#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The backing store could not answer a query.
    #[error("Data access failed: {0}")]
    DataAccess(String),
}
