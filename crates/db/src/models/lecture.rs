use coursehub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `lectures` table.
///
/// Owned exclusively by one course; deleting the course cascades here.
/// Slugs are unique per course, not globally.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lecture {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub slug: String,
    /// Opaque reference to the hosted video (the presentation collaborator
    /// resolves it; we never interpret it).
    pub video_ref: Option<String>,
    pub position: i32,
    pub is_previewable: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a lecture under a course (catalog administration seam).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLecture {
    pub title: String,
    pub slug: String,
    pub video_ref: Option<String>,
    pub position: i32,
    pub is_previewable: Option<bool>,
}

/// DTO for updating a lecture. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLecture {
    pub title: Option<String>,
    pub video_ref: Option<String>,
    pub position: Option<i32>,
    pub is_previewable: Option<bool>,
}
