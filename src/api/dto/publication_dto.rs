//! Publication DTOs for create, list, and retrieve operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::persistence::Publication;

/// Request body for `POST /publications/`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePublicationRequest {
    /// Publicly reachable URL of the uploaded PDF.
    pub file_url: String,
    /// Competence the publication is filed under (`YYYY-MM`).
    pub competence: String,
}

/// Publication representation returned by every endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct PublicationResponse {
    /// Row identifier.
    pub id: i64,
    /// Publicly reachable URL of the uploaded PDF.
    pub file_url: String,
    /// Competence the publication is filed under (`YYYY-MM`).
    pub competence: String,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Publication> for PublicationResponse {
    fn from(p: Publication) -> Self {
        Self {
            id: p.id,
            file_url: p.file_url,
            competence: p.competence,
            created_at: p.created_at,
        }
    }
}

/// Query parameters for `GET /publications/`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListParams {
    /// Exact competence to filter by (`YYYY-MM`). Omitted = all rows.
    #[serde(default)]
    pub competence: Option<String>,
}
