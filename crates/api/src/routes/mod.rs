pub mod courses;
pub mod health;
pub mod lectures;
pub mod topics;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /topics                          list (GET), create (POST)
/// /topics/{slug}/courses           active courses under a topic (GET)
///
/// /courses                         list active (GET, ?featured), create (POST)
/// /courses/search                  keyword search (GET, ?q)
/// /courses/{slug}                  detail (GET), update (PUT), delete (DELETE)
/// /courses/{slug}/lectures         list (GET), create (POST)
/// /courses/{slug}/enroll           enroll viewer (POST)
/// /courses/{slug}/progress         viewer progress (GET)
/// /courses/{slug}/reviews          list (GET), submit/replace (POST)
///
/// /lectures/{id}                   update (PUT), delete (DELETE)
/// /lectures/{id}/complete          mark complete, idempotent (POST)
/// /lectures/{id}/touch             record access (POST)
///
/// /users/sync                      upsert user record (PUT)
///
/// /me/courses                      viewer's enrolled courses (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Topic index and topic-scoped catalog.
        .nest("/topics", topics::router())
        // Course catalog plus course-scoped enrollment, progress, and reviews.
        .nest("/courses", courses::router())
        // Lecture mutations and per-lecture progress.
        .nest("/lectures", lectures::router())
        // User sync from the identity collaborator.
        .nest("/users", users::router())
        // The viewer's enrollment ledger.
        .route("/me/courses", get(handlers::enrollments::my_courses))
}
