//! PostgreSQL implementation of the publication store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::models::Publication;
use super::PublicationStore;
use crate::error::ApiError;

/// PostgreSQL-backed publication store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the bundled migrations, creating the `publications`
    /// table and its indexes when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`ApiError::PersistenceError`] when a migration fails.
    pub async fn migrate(&self) -> Result<(), ApiError> {
        sqlx::migrate!()
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::PersistenceError(e.to_string()))
    }
}

type PublicationRow = (i64, String, String, DateTime<Utc>);

fn into_publication((id, file_url, competence, created_at): PublicationRow) -> Publication {
    Publication {
        id,
        file_url,
        competence,
        created_at,
    }
}

#[async_trait]
impl PublicationStore for PostgresStore {
    async fn insert(&self, file_url: &str, competence: &str) -> Result<Publication, ApiError> {
        let row = sqlx::query_as::<_, PublicationRow>(
            "INSERT INTO publications (file_url, competence) VALUES ($1, $2) \
             RETURNING id, file_url, competence, created_at",
        )
        .bind(file_url)
        .bind(competence)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::DuplicateFileUrl(file_url.to_string())
            }
            _ => ApiError::PersistenceError(e.to_string()),
        })?;

        Ok(into_publication(row))
    }

    async fn list(&self, competence: Option<&str>) -> Result<Vec<Publication>, ApiError> {
        let rows = if let Some(competence) = competence {
            sqlx::query_as::<_, PublicationRow>(
                "SELECT id, file_url, competence, created_at FROM publications \
                 WHERE competence = $1 ORDER BY created_at DESC, id DESC",
            )
            .bind(competence)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, PublicationRow>(
                "SELECT id, file_url, competence, created_at FROM publications \
                 ORDER BY created_at DESC, id DESC",
            )
            .fetch_all(&self.pool)
            .await
        }
        .map_err(|e| ApiError::PersistenceError(e.to_string()))?;

        Ok(rows.into_iter().map(into_publication).collect())
    }

    async fn get(&self, id: i64) -> Result<Publication, ApiError> {
        let row = sqlx::query_as::<_, PublicationRow>(
            "SELECT id, file_url, competence, created_at FROM publications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApiError::PersistenceError(e.to_string()))?;

        row.map(into_publication)
            .ok_or(ApiError::PublicationNotFound(id))
    }
}
