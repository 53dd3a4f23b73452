//! Persistence layer: the publication store and its backends.
//!
//! Provides the [`PublicationStore`] trait for durable storage of
//! publication rows. The production implementation uses `sqlx::PgPool`
//! for async PostgreSQL access; [`memory::MemoryStore`] backs tests and
//! database-less runs with the same invariants.

pub mod memory;
pub mod models;
pub mod postgres;

pub use memory::MemoryStore;
pub use models::Publication;
pub use postgres::PostgresStore;

use async_trait::async_trait;

use crate::error::ApiError;

/// Storage seam between the API handlers and a concrete backend.
///
/// Invariants every implementation upholds: `file_url` is unique
/// (duplicate inserts fail, never overwrite), rows are immutable after
/// creation, and listing order is newest-first.
#[async_trait]
pub trait PublicationStore: Send + Sync + std::fmt::Debug {
    /// Inserts a new publication row and returns the stored
    /// representation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::DuplicateFileUrl`] when `file_url` already
    /// exists, or [`ApiError::PersistenceError`] on backend failure.
    async fn insert(&self, file_url: &str, competence: &str) -> Result<Publication, ApiError>;

    /// Lists publications newest-first, optionally filtered by exact
    /// competence match.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PersistenceError`] on backend failure.
    async fn list(&self, competence: Option<&str>) -> Result<Vec<Publication>, ApiError>;

    /// Fetches a single publication by row ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PublicationNotFound`] when no row has the
    /// given ID, or [`ApiError::PersistenceError`] on backend failure.
    async fn get(&self, id: i64) -> Result<Publication, ApiError>;
}
