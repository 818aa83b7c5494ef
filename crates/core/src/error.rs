use crate::types::DbId;

/// Domain-level errors shared across the platform.
///
/// Storage-level failures are translated into one of these variants at the
/// repository seam (`coursehub_db::map_db_err`), so callers never handle a
/// raw `sqlx::Error`. All variants are recoverable and local to the
/// operation that produced them.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Entity not found: {entity} with slug {slug}")]
    NotFoundBySlug { entity: &'static str, slug: String },

    /// The user already holds an enrollment for this course. Informational
    /// from the caller's perspective: the desired state already exists.
    #[error("User {user_id} is already enrolled in course {course_id}")]
    AlreadyEnrolled { user_id: DbId, course_id: DbId },

    /// A progress or review operation was attempted without an enrollment.
    #[error("User {user_id} is not enrolled in course {course_id}")]
    NotEnrolled { user_id: DbId, course_id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
