use folio_core::store::AuthorStoreArc;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Author data-access capability (Postgres in production, swappable in tests).
    pub authors: AuthorStoreArc,
}
