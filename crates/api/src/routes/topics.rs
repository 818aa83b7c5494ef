use axum::routing::get;
use axum::Router;

use crate::handlers::topics;
use crate::state::AppState;

/// Topic routes, nested under `/topics`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(topics::list_topics).post(topics::create_topic))
        .route("/{slug}/courses", get(topics::topic_courses))
}
