/**
 * Account Handler Types
 *
 * Request and response types shared by the signup, signin, and details
 * handlers.
 */

use serde::{Deserialize, Serialize};

/// Signup request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// Display name
    pub name: String,
    /// Email address (must be unique)
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
}

/// Signin request
#[derive(Deserialize, Serialize, Debug)]
pub struct SigninRequest {
    /// Email address
    pub email: String,
    /// Plaintext password (verified against the stored digest)
    pub password: String,
}

/// Token response
///
/// Returned by signup and signin. The token is prefixed with the
/// "Bearer " scheme name, ready to be echoed back in the
/// `Authorization` header.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

/// User details response
///
/// Never includes the password digest.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserDetailsResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_signup_request_deserializes() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"name":"A","email":"a@x.com","password":"secret12"}"#,
        )
        .unwrap();
        assert_eq!(request.name, "A");
        assert_eq!(request.email, "a@x.com");
    }

    #[test]
    fn test_signup_request_rejects_missing_fields() {
        let result = serde_json::from_str::<SignupRequest>(r#"{"email":"a@x.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_details_has_no_digest_field() {
        let details = UserDetailsResponse {
            id: 1,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
        };
        let json = serde_json::to_value(&details).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }
}
