//! Repository for the `enrollments` table.
//!
//! The one-enrollment-per-(user, course) invariant is enforced by the
//! `uq_enrollments_user_course` constraint. The insert uses
//! `ON CONFLICT DO NOTHING`, so two concurrent enrolls from the same user
//! (a double-clicked submit) serialize on the constraint and exactly one
//! row survives; the loser surfaces `AlreadyEnrolled`, never a raw
//! constraint violation.

use coursehub_core::error::CoreError;
use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::map_db_err;
use crate::models::enrollment::{EnrolledCourse, Enrollment};

/// Column list for `enrollments` queries.
const ENROLLMENT_COLUMNS: &str = "id, user_id, course_id, enrolled_at";

pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Enroll a user in a course.
    ///
    /// Fails with [`CoreError::AlreadyEnrolled`] if an enrollment for the
    /// pair already exists, and [`CoreError::NotFound`] if the course or
    /// user is absent (foreign-key violation).
    pub async fn enroll(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Enrollment, CoreError> {
        let query = format!(
            "INSERT INTO enrollments (user_id, course_id) \
             VALUES ($1, $2) \
             ON CONFLICT (user_id, course_id) DO NOTHING \
             RETURNING {ENROLLMENT_COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| translate_enroll_error(e, user_id, course_id))?;

        match inserted {
            Some(enrollment) => {
                tracing::info!(user_id, course_id, "User enrolled in course");
                Ok(enrollment)
            }
            // The conflict target swallowed the insert: the row exists.
            None => Err(CoreError::AlreadyEnrolled { user_id, course_id }),
        }
    }

    /// Check whether a user is enrolled in a course.
    ///
    /// Gates lecture access, progress mutation, and review submission.
    pub async fn is_enrolled(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<bool, CoreError> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM enrollments WHERE user_id = $1 AND course_id = $2)",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(pool)
        .await
        .map_err(map_db_err)
    }

    /// Find the enrollment for a (user, course) pair.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, CoreError> {
        let query = format!(
            "SELECT {ENROLLMENT_COLUMNS} FROM enrollments \
             WHERE user_id = $1 AND course_id = $2"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
            .map_err(map_db_err)
    }

    /// List a user's enrolled courses with progress counts, most recent
    /// enrollment first. One query; the progress join is filtered to each
    /// course's own lectures.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<EnrolledCourse>, CoreError> {
        sqlx::query_as::<_, EnrolledCourse>(
            "SELECT c.id AS course_id, c.title, c.slug, c.description, c.image_url, \
                    c.is_active, e.enrolled_at, \
                    COUNT(l.id) AS total_lectures, \
                    COUNT(l.id) FILTER (WHERE lp.completed) AS completed_lectures \
             FROM enrollments e \
             JOIN courses c ON c.id = e.course_id \
             LEFT JOIN lectures l ON l.course_id = c.id \
             LEFT JOIN lecture_progress lp \
                    ON lp.lecture_id = l.id AND lp.user_id = e.user_id \
             WHERE e.user_id = $1 \
             GROUP BY c.id, e.enrolled_at \
             ORDER BY e.enrolled_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(map_db_err)
    }
}

/// Translate enroll-specific storage failures into domain errors.
///
/// A unique violation here can only be the enrollment constraint (kept as
/// a safety net; the `ON CONFLICT` target normally absorbs it). A
/// foreign-key violation means the course or user vanished between lookup
/// and insert.
fn translate_enroll_error(err: sqlx::Error, user_id: DbId, course_id: DbId) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some("23505") => return CoreError::AlreadyEnrolled { user_id, course_id },
            Some("23503") => {
                let constraint = db_err.constraint().unwrap_or("");
                return if constraint.contains("user") {
                    CoreError::NotFound {
                        entity: "User",
                        id: user_id,
                    }
                } else {
                    CoreError::NotFound {
                        entity: "Course",
                        id: course_id,
                    }
                };
            }
            _ => {}
        }
    }
    map_db_err(err)
}
