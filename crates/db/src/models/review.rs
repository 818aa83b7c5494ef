//! Review models and DTOs.

use coursehub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table.
///
/// At most one per (user, course); resubmission replaces rating, comment,
/// and `updated_at` in place so an evolving opinion never skews the
/// average with duplicates.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A review joined with the reviewer's display attributes, for the course
/// detail page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewWithAuthor {
    pub id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting (or resubmitting) a review.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReview {
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

/// Aggregate review figures for a course.
///
/// `average` is `None` when the course has no reviews — callers render a
/// distinct "no ratings yet" state rather than treating absence as zero.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReviewStats {
    pub average: Option<f64>,
    pub count: i64,
}
