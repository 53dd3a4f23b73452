//! Database models for publications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored publication row from the `publications` table.
///
/// Rows are immutable after creation: nothing in the system updates or
/// deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Auto-increment row ID.
    pub id: i64,
    /// Publicly reachable URL of the uploaded PDF. Unique across all
    /// rows.
    pub file_url: String,
    /// The `YYYY-MM` competence the publication is filed under. The
    /// store does not validate the format; the producing pipeline is
    /// responsible for it.
    pub competence: String,
    /// Server-side creation timestamp, set once at insert.
    pub created_at: DateTime<Utc>,
}
