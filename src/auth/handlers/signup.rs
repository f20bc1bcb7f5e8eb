/**
 * Signup Handler
 *
 * Implements user registration for POST /api/v1/user/signup.
 *
 * # Registration Process
 *
 * 1. Validate name, email, and password
 * 2. Hash the password (bcrypt)
 * 3. Insert the user; a duplicate email surfaces as 409 Conflict
 * 4. Issue an identity token for the new user
 * 5. Return the token, "Bearer "-prefixed
 *
 * # Errors
 *
 * * `400 Bad Request` - empty name, invalid email, or short password
 * * `409 Conflict` - email already registered
 * * `500 Internal Server Error` - hashing, store, or signing failure
 */

use axum::{extract::State, response::Json};
use crate::auth::handlers::types::{SignupRequest, TokenResponse};
use crate::auth::password::hash_password;
use crate::auth::tokens::issue_token;
use crate::auth::users::create_user;
use crate::error::ApiError;
use crate::server::state::AppState;

fn validate(request: &SignupRequest) -> Result<(), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::invalid_input("Name must not be empty"));
    }
    if !request.email.contains('@') {
        return Err(ApiError::invalid_input("Invalid email format"));
    }
    if request.password.len() < 8 {
        return Err(ApiError::invalid_input(
            "Password must be at least 8 characters",
        ));
    }
    Ok(())
}

/// Sign up handler
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("signup request for email: {}", request.email);

    validate(&request)?;

    let password_hash = hash_password(&request.password)?;

    // The unique constraint on email does the duplicate check; racing
    // signups cannot both succeed.
    let user = create_user(&state.pool, &request.name, &request.email, &password_hash)
        .await
        .map_err(|e| ApiError::from_store_unique(e, "Email already registered"))?;

    let token = issue_token(user.id, &state.auth.jwt_secret, state.auth.token_ttl_secs)?;

    tracing::info!("user created: {} ({})", user.id, user.email);

    Ok(Json(TokenResponse {
        token: format!("Bearer {token}"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_request() {
        assert!(validate(&request("A", "a@x.com", "secret123")).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let result = validate(&request("  ", "a@x.com", "secret123"));
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_email_without_at() {
        let result = validate(&request("A", "not-an-email", "secret123"));
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_short_password() {
        let result = validate(&request("A", "a@x.com", "short"));
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }
}
