/**
 * Identity Tokens
 *
 * This module issues and verifies the signed JWT that carries a user's
 * identity between requests. Tokens are stateless: nothing is persisted
 * server-side, and validity is determined purely by signature and expiry
 * at verification time.
 *
 * # Claims
 *
 * The payload carries exactly one claim relevant to the service - the
 * user id (`sub`) - plus the standard `iat`/`exp` metadata.
 *
 * # Configuration
 *
 * The signing secret and token lifetime are supplied by the caller
 * (ultimately from process configuration, see `server::config`); this
 * module never reads the environment.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use crate::error::ApiError;

/// Default token lifetime: 30 days
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a decimal string
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

fn unix_now() -> Result<u64, ApiError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| {
            tracing::error!("system clock is before the Unix epoch: {e:?}");
            ApiError::Internal
        })
}

/// Issue a signed token for a user
///
/// # Arguments
///
/// * `user_id` - The user the token identifies
/// * `secret` - HS256 signing secret
/// * `ttl_secs` - Lifetime of the token in seconds
///
/// # Errors
///
/// `ApiError::Internal` if signing fails.
pub fn issue_token(user_id: i64, secret: &str, ttl_secs: u64) -> Result<String, ApiError> {
    let now = unix_now()?;
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now.saturating_add(ttl_secs),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| {
        tracing::error!("failed to sign token: {e:?}");
        ApiError::Internal
    })
}

/// Verify a token and extract the user id it carries
///
/// Any failure - bad signature, malformed token, expired token, or an
/// unparseable subject - yields `ApiError::Unauthorized`. The specific
/// cause is not disclosed to the caller.
pub fn verify_token(token: &str, secret: &str) -> Result<i64, ApiError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Unauthorized)?;

    data.claims.sub.parse::<i64>().map_err(|_| ApiError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_and_verify_round_trip() {
        let token = issue_token(42, SECRET, 3600).unwrap();
        assert_eq!(verify_token(&token, SECRET).unwrap(), 42);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_token(42, SECRET, 3600).unwrap();
        let result = verify_token(&token, "a-different-secret");
        assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let result = verify_token("not.a.token", SECRET);
        assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let token = issue_token(42, SECRET, 3600).unwrap();
        // Flip the payload segment; the signature no longer matches.
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = issue_token(43, SECRET, 3600).unwrap();
        let forged: Vec<&str> = forged_payload.split('.').collect();
        parts[1] = forged[1];
        let tampered = parts.join(".");

        let result = verify_token(&tampered, SECRET);
        assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Sign claims whose expiry is well past the default leeway.
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let claims = Claims {
            sub: "42".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        let result = verify_token(&token, SECRET);
        assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
    }

    #[test]
    fn test_huge_ttl_saturates_instead_of_overflowing() {
        let token = issue_token(42, SECRET, u64::MAX).unwrap();
        assert_eq!(verify_token(&token, SECRET).unwrap(), 42);
    }

    #[test]
    fn test_non_numeric_subject_is_rejected() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let claims = Claims {
            sub: "not-a-number".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        let result = verify_token(&token, SECRET);
        assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
    }
}
