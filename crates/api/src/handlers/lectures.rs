//! Handlers for lectures and per-lecture progress.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use coursehub_core::error::CoreError;
use coursehub_core::types::DbId;
use coursehub_db::models::lecture::{CreateLecture, UpdateLecture};
use coursehub_db::repositories::{LectureRepo, ProgressRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::courses::course_by_slug;
use crate::identity::Identity;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /courses/{slug}/lectures
///
/// The course's lectures in playback order.
pub async fn list_lectures(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let course = course_by_slug(&state.pool, &slug).await?;
    let lectures = LectureRepo::list_for_course(&state.pool, course.id).await?;
    Ok(Json(DataResponse { data: lectures }))
}

/// POST /courses/{slug}/lectures (catalog administration seam)
pub async fn create_lecture(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<CreateLecture>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }
    if input.slug.trim().is_empty() {
        return Err(AppError::BadRequest("slug must not be empty".into()));
    }

    let course = course_by_slug(&state.pool, &slug).await?;
    let lecture = LectureRepo::create(&state.pool, course.id, &input).await?;
    tracing::info!(
        lecture_id = lecture.id,
        course_id = course.id,
        "Lecture created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: lecture })))
}

/// PUT /lectures/{id} (catalog administration seam)
pub async fn update_lecture(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLecture>,
) -> AppResult<impl IntoResponse> {
    let lecture = LectureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lecture",
            id,
        }))?;

    tracing::info!(lecture_id = lecture.id, "Lecture updated");
    Ok(Json(DataResponse { data: lecture }))
}

/// DELETE /lectures/{id} (catalog administration seam)
pub async fn delete_lecture(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = LectureRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Lecture",
            id,
        }));
    }

    tracing::info!(lecture_id = id, "Lecture deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /lectures/{id}/complete
///
/// Mark the lecture complete for the identified user. Requires enrollment
/// in the owning course; idempotent on repeat.
pub async fn complete_lecture(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let progress = ProgressRepo::mark_complete(&state.pool, identity.user_id, id).await?;
    Ok(Json(DataResponse { data: progress }))
}

/// POST /lectures/{id}/touch
///
/// Record that the identified user opened the lecture, creating the
/// progress row on first access. Never un-sets completion.
pub async fn touch_lecture(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let progress = ProgressRepo::touch(&state.pool, identity.user_id, id).await?;
    Ok(Json(DataResponse { data: progress }))
}
