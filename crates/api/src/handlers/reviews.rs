//! Handlers for course reviews.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use coursehub_db::models::review::SubmitReview;
use coursehub_db::repositories::ReviewRepo;

use crate::error::AppResult;
use crate::handlers::courses::course_by_slug;
use crate::identity::Identity;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReviewListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /courses/{slug}/reviews?limit=&offset=
///
/// Recent reviews with reviewer display attributes, newest first.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ReviewListParams>,
) -> AppResult<impl IntoResponse> {
    let course = course_by_slug(&state.pool, &slug).await?;
    let reviews =
        ReviewRepo::list_for_course(&state.pool, course.id, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// POST /courses/{slug}/reviews
///
/// Submit or replace the identified user's review. Requires enrollment;
/// resubmission updates the existing row in place, so the per-course
/// average never double-counts a reviewer.
pub async fn submit_review(
    identity: Identity,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<SubmitReview>,
) -> AppResult<impl IntoResponse> {
    let course = course_by_slug(&state.pool, &slug).await?;

    let review = ReviewRepo::submit(&state.pool, identity.user_id, course.id, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}
