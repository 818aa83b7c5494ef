//! Repository for the `topics` table.

use coursehub_core::error::CoreError;
use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::map_db_err;
use crate::models::topic::{CreateTopic, Topic};

/// Column list for `topics` queries.
const TOPIC_COLUMNS: &str = "id, name, slug, description, is_active, created_at, updated_at";

pub struct TopicRepo;

impl TopicRepo {
    /// Create a topic (catalog administration seam).
    pub async fn create(pool: &PgPool, input: &CreateTopic) -> Result<Topic, CoreError> {
        let query = format!(
            "INSERT INTO topics (name, slug, description) \
             VALUES ($1, $2, $3) \
             RETURNING {TOPIC_COLUMNS}"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.description.as_deref())
            .fetch_one(pool)
            .await
            .map_err(map_db_err)
    }

    /// Find a topic by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Topic>, CoreError> {
        let query = format!("SELECT {TOPIC_COLUMNS} FROM topics WHERE slug = $1");
        sqlx::query_as::<_, Topic>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
            .map_err(map_db_err)
    }

    /// Find a topic by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Topic>, CoreError> {
        let query = format!("SELECT {TOPIC_COLUMNS} FROM topics WHERE id = $1");
        sqlx::query_as::<_, Topic>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(map_db_err)
    }

    /// List active topics in name order (the public topic index).
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Topic>, CoreError> {
        let query = format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE is_active ORDER BY name"
        );
        sqlx::query_as::<_, Topic>(&query)
            .fetch_all(pool)
            .await
            .map_err(map_db_err)
    }
}
