//! User reference model.
//!
//! Users are owned by the identity collaborator; this backend only stores
//! the identifier and display attributes it is handed, and references them
//! from enrollments, progress, and reviews.

use coursehub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table. The id is assigned upstream, not by us.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO the identity collaborator syncs users through. Upsert semantics:
/// display attributes are refreshed in place on every sync.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertUser {
    pub id: DbId,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
}
