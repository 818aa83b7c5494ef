//! Authenticated-identity extractor.
//!
//! Authentication lives in an upstream collaborator (an OAuth-terminating
//! reverse proxy); by the time a request reaches this backend the user is
//! already authenticated and identified by the `x-user-id` header. This
//! backend only consumes that identity — it never validates credentials.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use coursehub_core::error::CoreError;
use coursehub_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the upstream-authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The identified user for the current request.
///
/// Use this as an extractor parameter in any handler that requires an
/// identity:
///
/// ```ignore
/// async fn my_handler(identity: Identity) -> AppResult<Json<()>> {
///     tracing::info!(user_id = identity.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match MaybeIdentity::from_request_parts(parts, state).await? {
            MaybeIdentity(Some(identity)) => Ok(identity),
            MaybeIdentity(None) => Err(AppError::Core(CoreError::Unauthorized(format!(
                "Missing {USER_ID_HEADER} header"
            )))),
        }
    }
}

/// Like [`Identity`], but tolerates anonymous requests.
///
/// Catalog pages are public; they only enrich the response (enrollment
/// status, own review, progress) when an identity is present.
#[derive(Debug, Clone, Copy)]
pub struct MaybeIdentity(pub Option<Identity>);

impl FromRequestParts<AppState> for MaybeIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(raw) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(MaybeIdentity(None));
        };

        let user_id: DbId = raw
            .to_str()
            .ok()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(format!(
                    "Invalid {USER_ID_HEADER} header"
                )))
            })?;

        Ok(MaybeIdentity(Some(Identity { user_id })))
    }
}
