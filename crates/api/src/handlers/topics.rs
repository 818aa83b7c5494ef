//! Handlers for topics.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use coursehub_core::error::CoreError;
use coursehub_db::models::course::CourseListParams;
use coursehub_db::models::topic::CreateTopic;
use coursehub_db::repositories::{CourseRepo, TopicRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /topics
///
/// Active topics in name order.
pub async fn list_topics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let topics = TopicRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: topics }))
}

/// POST /topics (catalog administration seam)
pub async fn create_topic(
    State(state): State<AppState>,
    Json(input): Json<CreateTopic>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if input.slug.trim().is_empty() {
        return Err(AppError::BadRequest("slug must not be empty".into()));
    }

    let topic = TopicRepo::create(&state.pool, &input).await?;
    tracing::info!(topic_id = topic.id, slug = %topic.slug, "Topic created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: topic })))
}

/// GET /topics/{slug}/courses?limit=&offset=
///
/// Active courses filed under the topic, newest first.
pub async fn topic_courses(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<CourseListParams>,
) -> AppResult<impl IntoResponse> {
    let topic = TopicRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundBySlug {
                entity: "Topic",
                slug: slug.clone(),
            })
        })?;

    let courses = CourseRepo::list_by_topic(&state.pool, topic.id, &params).await?;
    Ok(Json(DataResponse { data: courses }))
}
