/**
 * User Details Handler
 *
 * Implements GET /api/v1/user/details, which returns the authenticated
 * caller's own record. The route sits behind the auth gate and is
 * scoped to the token's user; the password digest is never returned.
 */

use axum::{extract::State, response::Json};
use crate::auth::handlers::types::UserDetailsResponse;
use crate::auth::users::find_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid token (rejected by the gate)
/// * `404 Not Found` - the token's user no longer exists
/// * `500 Internal Server Error` - store failure
pub async fn details(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<UserDetailsResponse>, ApiError> {
    let user = find_user_by_id(&state.pool, identity.user_id)
        .await
        .map_err(|e| {
            tracing::error!("store error: {e:?}");
            ApiError::Internal
        })?
        .ok_or_else(|| {
            tracing::warn!("user {} not found", identity.user_id);
            ApiError::not_found("User not found")
        })?;

    Ok(Json(UserDetailsResponse {
        id: user.id,
        name: user.name,
        email: user.email,
    }))
}
