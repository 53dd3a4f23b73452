//! In-memory implementation of the publication store.
//!
//! Upholds the same invariants as the PostgreSQL backend (unique
//! `file_url`, immutable rows, newest-first listing). Used by the router
//! and service tests, and usable for running the API without a database.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::models::Publication;
use super::PublicationStore;
use crate::error::ApiError;

/// Mutex-guarded vector of rows with a monotonically increasing ID.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Publication>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    /// Whether the store holds no rows.
    pub async fn is_empty(&self) -> bool {
        self.rows.lock().await.is_empty()
    }
}

#[async_trait]
impl PublicationStore for MemoryStore {
    async fn insert(&self, file_url: &str, competence: &str) -> Result<Publication, ApiError> {
        let mut rows = self.rows.lock().await;
        if rows.iter().any(|p| p.file_url == file_url) {
            return Err(ApiError::DuplicateFileUrl(file_url.to_string()));
        }
        let publication = Publication {
            id: rows.len() as i64 + 1,
            file_url: file_url.to_string(),
            competence: competence.to_string(),
            created_at: Utc::now(),
        };
        rows.push(publication.clone());
        Ok(publication)
    }

    async fn list(&self, competence: Option<&str>) -> Result<Vec<Publication>, ApiError> {
        let rows = self.rows.lock().await;
        let mut matched: Vec<Publication> = rows
            .iter()
            .filter(|p| competence.is_none_or(|c| p.competence == c))
            .cloned()
            .collect();
        // IDs increase with creation order; reverse-sorting by ID is
        // newest-first even when timestamps tie.
        matched.sort_by_key(|p| std::cmp::Reverse(p.id));
        Ok(matched)
    }

    async fn get(&self, id: i64) -> Result<Publication, ApiError> {
        let rows = self.rows.lock().await;
        rows.iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::PublicationNotFound(id))
    }
}
