//! Handlers for the enrollment ledger.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use coursehub_db::repositories::{EnrollmentRepo, ProgressRepo};

use crate::error::AppResult;
use crate::handlers::courses::{course_by_slug, ProgressView};
use crate::identity::Identity;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /courses/{slug}/enroll
///
/// Enroll the identified user. A duplicate attempt answers 409
/// `ALREADY_ENROLLED`; the uniqueness constraint in the ledger makes sure
/// two concurrent attempts leave exactly one row.
pub async fn enroll(
    identity: Identity,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let course = course_by_slug(&state.pool, &slug).await?;

    let enrollment = EnrollmentRepo::enroll(&state.pool, identity.user_id, course.id).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: enrollment })))
}

/// GET /courses/{slug}/progress
///
/// The identified user's completion counts and fraction for this course.
pub async fn course_progress(
    identity: Identity,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let course = course_by_slug(&state.pool, &slug).await?;

    let summary = ProgressRepo::course_progress(&state.pool, identity.user_id, course.id).await?;

    Ok(Json(DataResponse {
        data: ProgressView::from(summary),
    }))
}

/// GET /me/courses
///
/// The identified user's enrolled courses with progress counts, most
/// recent enrollment first. Includes deactivated courses — enrollees are
/// not stranded by deactivation.
pub async fn my_courses(
    identity: Identity,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let courses = EnrollmentRepo::list_for_user(&state.pool, identity.user_id).await?;
    Ok(Json(DataResponse { data: courses }))
}
