//! Handlers for the public course catalog and the catalog administration
//! seam (create/update/delete, which an upstream admin surface calls).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use coursehub_core::error::CoreError;
use coursehub_db::models::course::{
    Course, CourseListParams, CourseSearchParams, CreateCourse, UpdateCourse,
};
use coursehub_db::models::lecture::Lecture;
use coursehub_db::models::review::{Review, ReviewStats};
use coursehub_db::models::topic::Topic;
use coursehub_db::repositories::{
    CourseRepo, EnrollmentRepo, LectureRepo, ProgressRepo, ReviewRepo,
};
use coursehub_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::identity::MaybeIdentity;
use crate::response::DataResponse;
use crate::state::AppState;

/// Resolve a course by slug or fail with a 404-mapped domain error.
///
/// Used by every course-scoped handler. Deliberately does NOT filter on
/// `is_active`: deactivated courses stay reachable for existing enrollees.
pub(crate) async fn course_by_slug(pool: &DbPool, slug: &str) -> Result<Course, AppError> {
    CourseRepo::find_by_slug(pool, slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundBySlug {
                entity: "Course",
                slug: slug.to_string(),
            })
        })
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// The user's completion state for one course, with the derived fraction.
#[derive(Debug, Serialize)]
pub struct ProgressView {
    pub completed: i64,
    pub total: i64,
    /// Fraction of the course completed, in [0, 1].
    pub fraction: f64,
}

impl From<coursehub_core::progress::ProgressSummary> for ProgressView {
    fn from(summary: coursehub_core::progress::ProgressSummary) -> Self {
        Self {
            completed: summary.completed,
            total: summary.total,
            fraction: summary.fraction(),
        }
    }
}

/// Per-viewer enrichment of the course detail page. Only present when the
/// request carries an identity.
#[derive(Debug, Serialize)]
pub struct ViewerContext {
    pub enrolled: bool,
    pub progress: ProgressView,
    pub completed_lecture_ids: Vec<i64>,
    pub own_review: Option<Review>,
}

/// Everything the course detail page needs in one payload.
#[derive(Debug, Serialize)]
pub struct CourseDetail {
    pub course: Course,
    pub topics: Vec<Topic>,
    pub lectures: Vec<Lecture>,
    pub review_stats: ReviewStats,
    pub viewer: Option<ViewerContext>,
}

// ---------------------------------------------------------------------------
// Public catalog
// ---------------------------------------------------------------------------

/// GET /courses?featured=&limit=&offset=
///
/// Active courses, newest first. `featured=true` is the homepage query.
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseListParams>,
) -> AppResult<impl IntoResponse> {
    let courses = CourseRepo::list_active(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// GET /courses/search?q=&limit=&offset=
///
/// Keyword search across title and description. An empty keyword yields
/// an empty result, not the full catalog.
pub async fn search_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseSearchParams>,
) -> AppResult<impl IntoResponse> {
    let courses = CourseRepo::search(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// GET /courses/{slug}
///
/// Course detail: catalog data, lecture list, review aggregates, and —
/// when the request is identified — the viewer's enrollment, progress,
/// and own review.
pub async fn get_course(
    identity: MaybeIdentity,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let course = course_by_slug(&state.pool, &slug).await?;

    let topics = CourseRepo::topics_for_course(&state.pool, course.id).await?;
    let lectures = LectureRepo::list_for_course(&state.pool, course.id).await?;
    let review_stats = ReviewRepo::stats_for_course(&state.pool, course.id).await?;

    let viewer = match identity.0 {
        Some(identity) => {
            let enrolled =
                EnrollmentRepo::is_enrolled(&state.pool, identity.user_id, course.id).await?;
            let progress =
                ProgressRepo::course_progress(&state.pool, identity.user_id, course.id).await?;
            let completed_lecture_ids =
                ProgressRepo::completed_lecture_ids(&state.pool, identity.user_id, course.id)
                    .await?;
            let own_review =
                ReviewRepo::find_by_user_and_course(&state.pool, identity.user_id, course.id)
                    .await?;
            Some(ViewerContext {
                enrolled,
                progress: progress.into(),
                completed_lecture_ids,
                own_review,
            })
        }
        None => None,
    };

    Ok(Json(DataResponse {
        data: CourseDetail {
            course,
            topics,
            lectures,
            review_stats,
            viewer,
        },
    }))
}

// ---------------------------------------------------------------------------
// Catalog administration seam
// ---------------------------------------------------------------------------

/// POST /courses
pub async fn create_course(
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }
    if input.slug.trim().is_empty() {
        return Err(AppError::BadRequest("slug must not be empty".into()));
    }

    let course = CourseRepo::create(&state.pool, &input).await?;
    tracing::info!(course_id = course.id, slug = %course.slug, "Course created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: course })))
}

/// PUT /courses/{slug}
///
/// Partial update; setting `is_active: false` is the soft-deactivate path.
pub async fn update_course(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<impl IntoResponse> {
    let course = course_by_slug(&state.pool, &slug).await?;

    let updated = CourseRepo::update(&state.pool, course.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course.id,
        }))?;

    tracing::info!(course_id = updated.id, "Course updated");
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /courses/{slug}
///
/// Hard delete; cascades to lectures, enrollments, progress, and reviews.
/// Prefer deactivation (`PUT` with `is_active: false`) for courses with
/// enrollments.
pub async fn delete_course(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let course = course_by_slug(&state.pool, &slug).await?;

    CourseRepo::delete(&state.pool, course.id).await?;
    tracing::info!(course_id = course.id, slug = %course.slug, "Course deleted");

    Ok(StatusCode::NO_CONTENT)
}
