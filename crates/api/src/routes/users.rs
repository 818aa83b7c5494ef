use axum::routing::put;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User sync routes, nested under `/users`.
pub fn router() -> Router<AppState> {
    Router::new().route("/sync", put(users::sync_user))
}
