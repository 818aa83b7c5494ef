use coursehub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `enrollments` table.
///
/// At most one per (user, course), enforced by `uq_enrollments_user_course`.
/// Rows are created once and never updated; they disappear only when the
/// owning user or course is deleted (cascade).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub enrolled_at: Timestamp,
}

/// One enrolled course with progress counts, as shown on the
/// "my courses" page. Produced by a single query to avoid N+1 lookups.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrolledCourse {
    pub course_id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub enrolled_at: Timestamp,
    pub total_lectures: i64,
    pub completed_lectures: i64,
}
