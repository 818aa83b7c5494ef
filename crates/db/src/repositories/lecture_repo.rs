//! Repository for the `lectures` table.

use coursehub_core::error::CoreError;
use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::map_db_err;
use crate::models::lecture::{CreateLecture, Lecture, UpdateLecture};

/// Column list for `lectures` queries.
const LECTURE_COLUMNS: &str = "\
    id, course_id, title, slug, video_ref, position, is_previewable, \
    created_at, updated_at";

pub struct LectureRepo;

impl LectureRepo {
    /// Create a lecture under a course (catalog administration seam).
    pub async fn create(
        pool: &PgPool,
        course_id: DbId,
        input: &CreateLecture,
    ) -> Result<Lecture, CoreError> {
        let query = format!(
            "INSERT INTO lectures (course_id, title, slug, video_ref, position, is_previewable) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE)) \
             RETURNING {LECTURE_COLUMNS}"
        );
        sqlx::query_as::<_, Lecture>(&query)
            .bind(course_id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(input.video_ref.as_deref())
            .bind(input.position)
            .bind(input.is_previewable)
            .fetch_one(pool)
            .await
            .map_err(map_db_err)
    }

    /// Update a lecture. Absent fields are left unchanged.
    ///
    /// Returns `None` if no lecture with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLecture,
    ) -> Result<Option<Lecture>, CoreError> {
        let query = format!(
            "UPDATE lectures SET \
                 title = COALESCE($2, title), \
                 video_ref = COALESCE($3, video_ref), \
                 position = COALESCE($4, position), \
                 is_previewable = COALESCE($5, is_previewable) \
             WHERE id = $1 \
             RETURNING {LECTURE_COLUMNS}"
        );
        sqlx::query_as::<_, Lecture>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.video_ref.as_deref())
            .bind(input.position)
            .bind(input.is_previewable)
            .fetch_optional(pool)
            .await
            .map_err(map_db_err)
    }

    /// Delete a lecture. Cascades to progress rows. Returns `true` if a
    /// lecture was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM lectures WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a lecture by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lecture>, CoreError> {
        let query = format!("SELECT {LECTURE_COLUMNS} FROM lectures WHERE id = $1");
        sqlx::query_as::<_, Lecture>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(map_db_err)
    }

    /// Find a lecture by its per-course slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        course_id: DbId,
        slug: &str,
    ) -> Result<Option<Lecture>, CoreError> {
        let query =
            format!("SELECT {LECTURE_COLUMNS} FROM lectures WHERE course_id = $1 AND slug = $2");
        sqlx::query_as::<_, Lecture>(&query)
            .bind(course_id)
            .bind(slug)
            .fetch_optional(pool)
            .await
            .map_err(map_db_err)
    }

    /// List a course's lectures in playback order.
    pub async fn list_for_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Lecture>, CoreError> {
        let query = format!(
            "SELECT {LECTURE_COLUMNS} FROM lectures \
             WHERE course_id = $1 \
             ORDER BY position, id"
        );
        sqlx::query_as::<_, Lecture>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
            .map_err(map_db_err)
    }

    /// Count a course's lectures.
    pub async fn count_for_course(pool: &PgPool, course_id: DbId) -> Result<i64, CoreError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM lectures WHERE course_id = $1")
            .bind(course_id)
            .fetch_one(pool)
            .await
            .map_err(map_db_err)
    }
}
