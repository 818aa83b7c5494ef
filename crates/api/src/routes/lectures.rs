use axum::routing::{post, put};
use axum::Router;

use crate::handlers::lectures;
use crate::state::AppState;

/// Lecture routes, nested under `/lectures`. Creation and listing live
/// under the owning course's routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            put(lectures::update_lecture).delete(lectures::delete_lecture),
        )
        .route("/{id}/complete", post(lectures::complete_lecture))
        .route("/{id}/touch", post(lectures::touch_lecture))
}
