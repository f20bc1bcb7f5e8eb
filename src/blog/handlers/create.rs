/**
 * Create Post Handler
 *
 * Implements POST /api/v1/blog/blog-post. The owning user id comes from
 * the authenticated context bound by the gate, never from the request
 * body, and is immutable afterwards.
 */

use axum::{extract::State, response::Json};
use crate::blog::handlers::types::{CreatePostRequest, CreatePostResponse};
use crate::blog::posts::create_post;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Create post handler
///
/// # Errors
///
/// * `400 Bad Request` - empty title
/// * `401 Unauthorized` - rejected by the gate
/// * `500 Internal Server Error` - store failure
pub async fn create(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<CreatePostResponse>, ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::invalid_input("Title must not be empty"));
    }

    let post = create_post(
        &state.pool,
        &request.title,
        &request.content,
        request.published,
        identity.user_id,
    )
    .await
    .map_err(|e| {
        tracing::error!("failed to create post: {e:?}");
        ApiError::Internal
    })?;

    tracing::info!("post {} created by user {}", post.id, identity.user_id);

    Ok(Json(CreatePostResponse {
        message: "Blog is Posted Successfully".to_string(),
        post_id: post.id,
    }))
}
