use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{courses, enrollments, lectures, reviews};
use crate::state::AppState;

/// Course routes, nested under `/courses`.
///
/// The slug is the only course path parameter; course-scoped sub-resources
/// (lectures, enrollment, progress, reviews) all hang off it.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list_courses).post(courses::create_course))
        .route("/search", get(courses::search_courses))
        .route(
            "/{slug}",
            get(courses::get_course)
                .put(courses::update_course)
                .delete(courses::delete_course),
        )
        .route(
            "/{slug}/lectures",
            get(lectures::list_lectures).post(lectures::create_lecture),
        )
        .route("/{slug}/enroll", post(enrollments::enroll))
        .route("/{slug}/progress", get(enrollments::course_progress))
        .route(
            "/{slug}/reviews",
            get(reviews::list_reviews).post(reviews::submit_review),
        )
}
