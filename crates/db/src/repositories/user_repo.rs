//! Repository for the `users` table.
//!
//! Users are owned by the identity collaborator; the only write path is the
//! upsert it syncs through.

use coursehub_core::error::CoreError;
use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::map_db_err;
use crate::models::user::{UpsertUser, User};

/// Column list for `users` queries.
const USER_COLUMNS: &str = "id, username, display_name, avatar_url, created_at, updated_at";

pub struct UserRepo;

impl UserRepo {
    /// Insert or refresh a user record from the identity collaborator.
    /// Display attributes are replaced on conflict.
    pub async fn upsert(pool: &PgPool, input: &UpsertUser) -> Result<User, CoreError> {
        let query = format!(
            "INSERT INTO users (id, username, display_name, avatar_url) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE SET \
                 username = EXCLUDED.username, \
                 display_name = EXCLUDED.display_name, \
                 avatar_url = EXCLUDED.avatar_url \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.id)
            .bind(&input.username)
            .bind(&input.display_name)
            .bind(input.avatar_url.as_deref())
            .fetch_one(pool)
            .await
            .map_err(map_db_err)
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, CoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(map_db_err)
    }
}
