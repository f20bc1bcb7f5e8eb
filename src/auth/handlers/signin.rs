/**
 * Signin Handler
 *
 * Implements user authentication for POST /api/v1/user/signin.
 *
 * # Authentication Process
 *
 * 1. Look the user up by email alone
 * 2. Verify the supplied password against the stored digest
 * 3. Issue an identity token
 *
 * # Security Notes
 *
 * An unknown email and a wrong password produce byte-identical
 * responses, so the endpoint cannot be used to enumerate accounts. The
 * lookup is never filtered by (email, digest) pairs; the digest
 * comparison happens in the service, after the email-only lookup.
 */

use axum::{extract::State, response::Json};
use crate::auth::handlers::types::{SigninRequest, TokenResponse};
use crate::auth::password::verify_password;
use crate::auth::tokens::issue_token;
use crate::auth::users::find_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Sign in handler
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("signin request for email: {}", request.email);

    let user = find_user_by_email(&state.pool, &request.email)
        .await
        .map_err(|e| {
            tracing::error!("store error: {e:?}");
            ApiError::Internal
        })?
        .ok_or_else(|| {
            tracing::warn!("signin for unknown email");
            ApiError::InvalidCredentials
        })?;

    if !verify_password(&request.password, &user.password_hash)? {
        tracing::warn!("wrong password for user {}", user.id);
        return Err(ApiError::InvalidCredentials);
    }

    let token = issue_token(user.id, &state.auth.jwt_secret, state.auth.token_ttl_secs)?;

    tracing::info!("user signed in: {}", user.id);

    Ok(Json(TokenResponse {
        token: format!("Bearer {token}"),
    }))
}
