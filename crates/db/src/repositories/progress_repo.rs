//! Repository for the `lecture_progress` table.
//!
//! Completion is monotone: `mark_complete` can only flip `completed` from
//! false to true, and repeating it is a no-op that returns the existing
//! row. Both mutation paths require the user to be enrolled in the
//! lecture's owning course.

use coursehub_core::error::CoreError;
use coursehub_core::progress::ProgressSummary;
use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::map_db_err;
use crate::models::lecture_progress::LectureProgress;
use crate::repositories::EnrollmentRepo;

/// Column list for `lecture_progress` queries.
const PROGRESS_COLUMNS: &str = "\
    id, user_id, lecture_id, completed, completed_at, last_accessed, \
    created_at, updated_at";

pub struct ProgressRepo;

impl ProgressRepo {
    /// Mark a lecture complete for a user.
    ///
    /// Fails with [`CoreError::NotFound`] if the lecture does not exist and
    /// [`CoreError::NotEnrolled`] if the user is not enrolled in its
    /// course. Idempotent: a lecture already marked complete is returned
    /// unchanged, keeping its original `completed_at`.
    pub async fn mark_complete(
        pool: &PgPool,
        user_id: DbId,
        lecture_id: DbId,
    ) -> Result<LectureProgress, CoreError> {
        let course_id = Self::require_enrollment(pool, user_id, lecture_id).await?;

        // The WHERE guard makes the conflict arm a true no-op for rows
        // already complete, so RETURNING yields nothing and we hand back
        // the untouched row instead.
        let query = format!(
            "INSERT INTO lecture_progress (user_id, lecture_id, completed, completed_at) \
             VALUES ($1, $2, TRUE, now()) \
             ON CONFLICT (user_id, lecture_id) DO UPDATE SET \
                 completed = TRUE, \
                 completed_at = COALESCE(lecture_progress.completed_at, now()), \
                 last_accessed = now() \
             WHERE NOT lecture_progress.completed \
             RETURNING {PROGRESS_COLUMNS}"
        );
        let upserted = sqlx::query_as::<_, LectureProgress>(&query)
            .bind(user_id)
            .bind(lecture_id)
            .fetch_optional(pool)
            .await
            .map_err(map_db_err)?;

        match upserted {
            Some(progress) => {
                tracing::info!(user_id, lecture_id, course_id, "Lecture marked complete");
                Ok(progress)
            }
            None => Self::find(pool, user_id, lecture_id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "LectureProgress",
                    id: lecture_id,
                }),
        }
    }

    /// Record that a user opened a lecture, creating the progress row with
    /// completed = false on first access. Never un-sets completion.
    pub async fn touch(
        pool: &PgPool,
        user_id: DbId,
        lecture_id: DbId,
    ) -> Result<LectureProgress, CoreError> {
        Self::require_enrollment(pool, user_id, lecture_id).await?;

        let query = format!(
            "INSERT INTO lecture_progress (user_id, lecture_id) \
             VALUES ($1, $2) \
             ON CONFLICT (user_id, lecture_id) DO UPDATE SET \
                 last_accessed = now() \
             RETURNING {PROGRESS_COLUMNS}"
        );
        sqlx::query_as::<_, LectureProgress>(&query)
            .bind(user_id)
            .bind(lecture_id)
            .fetch_one(pool)
            .await
            .map_err(map_db_err)
    }

    /// Find the progress row for a (user, lecture) pair.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        lecture_id: DbId,
    ) -> Result<Option<LectureProgress>, CoreError> {
        let query = format!(
            "SELECT {PROGRESS_COLUMNS} FROM lecture_progress \
             WHERE user_id = $1 AND lecture_id = $2"
        );
        sqlx::query_as::<_, LectureProgress>(&query)
            .bind(user_id)
            .bind(lecture_id)
            .fetch_optional(pool)
            .await
            .map_err(map_db_err)
    }

    /// A user's completion counts for one course.
    ///
    /// The join is anchored on the course's own lectures, so progress on
    /// other courses can never leak into the fraction.
    pub async fn course_progress(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<ProgressSummary, CoreError> {
        let (completed, total): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(lp.id) FILTER (WHERE lp.completed), COUNT(l.id) \
             FROM lectures l \
             LEFT JOIN lecture_progress lp \
                    ON lp.lecture_id = l.id AND lp.user_id = $1 \
             WHERE l.course_id = $2",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(pool)
        .await
        .map_err(map_db_err)?;

        Ok(ProgressSummary::new(completed, total))
    }

    /// Ids of the course's lectures the user has completed, for marking
    /// the lecture list in the UI.
    pub async fn completed_lecture_ids(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Vec<DbId>, CoreError> {
        sqlx::query_scalar(
            "SELECT lp.lecture_id \
             FROM lecture_progress lp \
             JOIN lectures l ON l.id = lp.lecture_id \
             WHERE lp.user_id = $1 AND l.course_id = $2 AND lp.completed \
             ORDER BY lp.lecture_id",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_all(pool)
        .await
        .map_err(map_db_err)
    }

    /// Resolve the lecture's owning course and verify enrollment.
    ///
    /// Returns the course id on success.
    async fn require_enrollment(
        pool: &PgPool,
        user_id: DbId,
        lecture_id: DbId,
    ) -> Result<DbId, CoreError> {
        let course_id: Option<DbId> =
            sqlx::query_scalar("SELECT course_id FROM lectures WHERE id = $1")
                .bind(lecture_id)
                .fetch_optional(pool)
                .await
                .map_err(map_db_err)?;

        let course_id = course_id.ok_or(CoreError::NotFound {
            entity: "Lecture",
            id: lecture_id,
        })?;

        if !EnrollmentRepo::is_enrolled(pool, user_id, course_id).await? {
            return Err(CoreError::NotEnrolled { user_id, course_id });
        }

        Ok(course_id)
    }
}
