//! Course models and DTOs.

use coursehub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `courses` table.
///
/// Courses are never hard-deleted while enrollments reference them;
/// administrators flip `is_active` instead. An inactive course disappears
/// from public listings but stays reachable by slug so existing enrollees
/// are not stranded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a course (catalog administration seam).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Topics to associate. Unknown ids are a foreign-key error.
    #[serde(default)]
    pub topic_ids: Vec<DbId>,
}

/// DTO for updating a course. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}

/// Query parameters for `GET /courses`.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseListParams {
    /// Restrict to featured courses (the homepage query).
    pub featured: Option<bool>,
    /// Maximum results. Defaults to 20.
    pub limit: Option<i64>,
    /// Offset for pagination.
    pub offset: Option<i64>,
}

/// Query parameters for `GET /courses/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseSearchParams {
    /// Keyword matched case-insensitively against title and description.
    pub q: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
