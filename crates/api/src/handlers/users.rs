//! Handler for the identity collaborator's user sync.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use coursehub_db::models::user::UpsertUser;
use coursehub_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /users/sync
///
/// Insert or refresh a user record. The identity collaborator calls this
/// on login and on profile change; display attributes are replaced in
/// place on every sync.
pub async fn sync_user(
    State(state): State<AppState>,
    Json(input): Json<UpsertUser>,
) -> AppResult<impl IntoResponse> {
    if input.username.trim().is_empty() {
        return Err(AppError::BadRequest("username must not be empty".into()));
    }

    let user = UserRepo::upsert(&state.pool, &input).await?;
    tracing::info!(user_id = user.id, username = %user.username, "User synced");

    Ok(Json(DataResponse { data: user }))
}
