/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses so handlers
 * can return them directly.
 *
 * # Response Format
 *
 * Error responses are JSON objects with a single `message` field:
 *
 * ```json
 * {
 *   "message": "Unauthorized"
 * }
 * ```
 */

use axum::{
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "message": self.message(),
        });

        (
            status,
            [(CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_error_response_status() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_error_response_content_type() {
        let response = ApiError::Internal.into_response();
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_error_response_body_has_message_field() {
        let response = ApiError::not_found("Blog not found").into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Blog not found");
    }
}
