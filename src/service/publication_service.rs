//! Publication service: validation plus store delegation.

use std::sync::Arc;

use crate::error::ApiError;
use crate::persistence::{Publication, PublicationStore};

/// Orchestration layer for publication operations.
///
/// Thin by design: the store enforces uniqueness and ordering; the
/// service only rejects structurally empty input before it reaches the
/// database. Competence format is deliberately not validated here — the
/// producing pipeline owns the `YYYY-MM` contract.
#[derive(Debug, Clone)]
pub struct PublicationService {
    store: Arc<dyn PublicationStore>,
}

impl PublicationService {
    /// Creates a new `PublicationService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn PublicationStore>) -> Self {
        Self { store }
    }

    /// Records a new publication.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when `file_url` or
    /// `competence` is empty, [`ApiError::DuplicateFileUrl`] when the
    /// URL is already recorded, or a persistence error from the store.
    pub async fn create(&self, file_url: &str, competence: &str) -> Result<Publication, ApiError> {
        if file_url.trim().is_empty() {
            return Err(ApiError::InvalidRequest(
                "file_url must not be empty".to_string(),
            ));
        }
        if competence.trim().is_empty() {
            return Err(ApiError::InvalidRequest(
                "competence must not be empty".to_string(),
            ));
        }

        let publication = self.store.insert(file_url, competence).await?;
        tracing::info!(id = publication.id, competence, "publication recorded");
        Ok(publication)
    }

    /// Lists publications newest-first, optionally filtered by exact
    /// competence match.
    ///
    /// # Errors
    ///
    /// Returns a persistence error from the store.
    pub async fn list(&self, competence: Option<&str>) -> Result<Vec<Publication>, ApiError> {
        self.store.list(competence).await
    }

    /// Fetches a single publication by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PublicationNotFound`] when the ID does not
    /// exist, or a persistence error from the store.
    pub async fn get(&self, id: i64) -> Result<Publication, ApiError> {
        self.store.get(id).await
    }
}
