//! Repository for the `courses` table and the `course_topics` junction.
//!
//! Catalog reads are the hot path here: slug lookup, active listing,
//! topic filtering, and keyword search. Writes come only from the catalog
//! administration seam.

use coursehub_core::error::CoreError;
use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::map_db_err;
use crate::models::course::{
    Course, CourseListParams, CourseSearchParams, CreateCourse, UpdateCourse,
};
use crate::models::topic::Topic;

/// Column list for `courses` queries.
const COURSE_COLUMNS: &str = "\
    id, title, slug, description, image_url, is_active, is_featured, \
    created_at, updated_at";

/// Default page size for course listings.
const DEFAULT_LIMIT: i64 = 20;

/// Maximum page size for course listings.
const MAX_LIMIT: i64 = 100;

pub struct CourseRepo;

impl CourseRepo {
    // -----------------------------------------------------------------------
    // Writes (catalog administration seam)
    // -----------------------------------------------------------------------

    /// Create a course and associate its topics in one transaction.
    ///
    /// An unknown topic id fails the whole create with
    /// [`CoreError::NotFound`] and leaves no course row behind.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, CoreError> {
        let mut tx = pool.begin().await.map_err(map_db_err)?;

        let query = format!(
            "INSERT INTO courses (title, slug, description, image_url) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COURSE_COLUMNS}"
        );
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(input.description.as_deref())
            .bind(input.image_url.as_deref())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_err)?;

        Self::associate_topics(&mut tx, course.id, &input.topic_ids).await?;

        tx.commit().await.map_err(map_db_err)?;
        Ok(course)
    }

    /// Update a course. Absent fields are left unchanged.
    ///
    /// Returns `None` if no course with the given id exists. Flipping
    /// `is_active` to false is the soft-deactivate path: nothing else is
    /// touched, enrollments and reviews stay put.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, CoreError> {
        let query = format!(
            "UPDATE courses SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 image_url = COALESCE($4, image_url), \
                 is_active = COALESCE($5, is_active), \
                 is_featured = COALESCE($6, is_featured) \
             WHERE id = $1 \
             RETURNING {COURSE_COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.description.as_deref())
            .bind(input.image_url.as_deref())
            .bind(input.is_active)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
            .map_err(map_db_err)
    }

    /// Hard-delete a course. Cascades to lectures, enrollments, progress,
    /// and reviews. Returns `true` if a course was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the set of topics associated with a course.
    ///
    /// Atomic: if any topic id is unknown the existing associations are
    /// kept untouched.
    pub async fn set_topics(
        pool: &PgPool,
        course_id: DbId,
        topic_ids: &[DbId],
    ) -> Result<(), CoreError> {
        let mut tx = pool.begin().await.map_err(map_db_err)?;

        sqlx::query("DELETE FROM course_topics WHERE course_id = $1")
            .bind(course_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;

        Self::associate_topics(&mut tx, course_id, topic_ids).await?;

        tx.commit().await.map_err(map_db_err)
    }

    /// Insert course-topic rows inside the caller's transaction.
    async fn associate_topics(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        course_id: DbId,
        topic_ids: &[DbId],
    ) -> Result<(), CoreError> {
        for &topic_id in topic_ids {
            sqlx::query(
                "INSERT INTO course_topics (course_id, topic_id) \
                 VALUES ($1, $2) \
                 ON CONFLICT (course_id, topic_id) DO NOTHING",
            )
            .bind(course_id)
            .bind(topic_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| translate_topic_error(e, topic_id))?;
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Find a course by slug, active or not.
    ///
    /// Deactivated courses must stay reachable here: existing enrollees
    /// still need their course pages.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Course>, CoreError> {
        let query = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE slug = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
            .map_err(map_db_err)
    }

    /// Find a course by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, CoreError> {
        let query = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(map_db_err)
    }

    /// List active courses, newest first, optionally restricted to
    /// featured ones (the homepage query).
    pub async fn list_active(
        pool: &PgPool,
        params: &CourseListParams,
    ) -> Result<Vec<Course>, CoreError> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0);

        let query = match params.featured {
            Some(true) => format!(
                "SELECT {COURSE_COLUMNS} FROM courses \
                 WHERE is_active AND is_featured \
                 ORDER BY created_at DESC \
                 LIMIT $1 OFFSET $2"
            ),
            _ => format!(
                "SELECT {COURSE_COLUMNS} FROM courses \
                 WHERE is_active \
                 ORDER BY created_at DESC \
                 LIMIT $1 OFFSET $2"
            ),
        };
        sqlx::query_as::<_, Course>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
            .map_err(map_db_err)
    }

    /// List active courses carrying the given topic, newest first.
    pub async fn list_by_topic(
        pool: &PgPool,
        topic_id: DbId,
        params: &CourseListParams,
    ) -> Result<Vec<Course>, CoreError> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0);

        sqlx::query_as::<_, Course>(
            "SELECT c.id, c.title, c.slug, c.description, c.image_url, \
                    c.is_active, c.is_featured, c.created_at, c.updated_at \
             FROM courses c \
             JOIN course_topics ct ON ct.course_id = c.id \
             WHERE c.is_active AND ct.topic_id = $1 \
             ORDER BY c.created_at DESC \
             LIMIT $2 OFFSET $3",
        )
            .bind(topic_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
            .map_err(map_db_err)
    }

    /// Keyword search across title and description, active courses only.
    pub async fn search(
        pool: &PgPool,
        params: &CourseSearchParams,
    ) -> Result<Vec<Course>, CoreError> {
        let keyword = params.q.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0);
        let pattern = format!("%{}%", escape_like(keyword));

        let query = format!(
            "SELECT {COURSE_COLUMNS} FROM courses \
             WHERE is_active \
               AND (title ILIKE $1 OR description ILIKE $1) \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
            .map_err(map_db_err)
    }

    /// List the topics associated with a course, in name order.
    pub async fn topics_for_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Topic>, CoreError> {
        sqlx::query_as::<_, Topic>(
            "SELECT t.id, t.name, t.slug, t.description, t.is_active, \
                    t.created_at, t.updated_at \
             FROM course_topics ct \
             JOIN topics t ON t.id = ct.topic_id \
             WHERE ct.course_id = $1 \
             ORDER BY t.name",
        )
        .bind(course_id)
        .fetch_all(pool)
        .await
        .map_err(map_db_err)
    }
}

/// Translate a topic-association failure into a domain error.
///
/// A foreign-key violation here means the topic id does not exist; the
/// course side is held by the surrounding transaction.
fn translate_topic_error(err: sqlx::Error, topic_id: DbId) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23503") {
            return CoreError::NotFound {
                entity: "Topic",
                id: topic_id,
            };
        }
    }
    map_db_err(err)
}

/// Escape LIKE metacharacters so user keywords match literally.
fn escape_like(keyword: &str) -> String {
    keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
