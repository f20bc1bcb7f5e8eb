/**
 * Authentication Middleware
 *
 * The auth gate for protected routes. It extracts and verifies the
 * bearer token from the Authorization header and binds the resolved
 * identity to the request for downstream handlers.
 *
 * # Per-request state machine
 *
 * Unauthenticated → Authenticated (identity bound to the request), or
 * Unauthenticated → Rejected (uniform 401, cause not disclosed).
 *
 * The gate never touches the store: validity of a token is purely
 * signature plus expiry.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use crate::auth::tokens::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Identity resolved from a verified token, bound per request
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Authentication middleware
///
/// 1. Requires an `Authorization` header
/// 2. Takes the second space-delimited segment as the token; a header
///    with no second segment is rejected, not a panic
/// 3. Verifies the token and inserts `AuthenticatedUser` into the
///    request extensions
///
/// Every failure produces the same 401 `{"message":"Unauthorized"}`
/// response.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::Unauthorized
        })?;

    let token = header.split_whitespace().nth(1).ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        ApiError::Unauthorized
    })?;

    let user_id = verify_token(token, &state.auth.jwt_secret)?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated identity
///
/// Used as a handler parameter on routes behind the gate. Rejects with
/// 401 if the gate has not run for this request.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthorized
            })
    }
}
