/**
 * Update Post Handler
 *
 * Implements PUT /api/v1/blog/post-update. The route sits behind the
 * auth gate and enforces ownership: only the post's author may modify
 * it. Only title and content are mutable; the owner binding and the
 * published flag are not touched here.
 */

use axum::{extract::State, response::Json};
use crate::blog::handlers::types::{UpdatePostRequest, UpdatePostResponse};
use crate::blog::posts::{find_post_author, update_post};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Update post handler
///
/// # Errors
///
/// * `400 Bad Request` - empty title
/// * `401 Unauthorized` - rejected by the gate
/// * `403 Forbidden` - caller does not own the post
/// * `404 Not Found` - no post with this id
/// * `500 Internal Server Error` - store failure
pub async fn update(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<UpdatePostResponse>, ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::invalid_input("Title must not be empty"));
    }

    // Existence and ownership are checked before the write; an update of
    // a missing post is a 404, not a silent no-op.
    let author_id = find_post_author(&state.pool, request.id)
        .await
        .map_err(|e| {
            tracing::error!("failed to fetch post {}: {e:?}", request.id);
            ApiError::Internal
        })?
        .ok_or_else(|| ApiError::not_found("Blog not found"))?;

    if author_id != identity.user_id {
        tracing::warn!(
            "user {} attempted to update post {} owned by {}",
            identity.user_id,
            request.id,
            author_id
        );
        return Err(ApiError::Forbidden("You do not own this post".to_string()));
    }

    let id = update_post(&state.pool, request.id, &request.title, &request.content)
        .await
        .map_err(|e| {
            tracing::error!("failed to update post {}: {e:?}", request.id);
            ApiError::Internal
        })?
        .ok_or_else(|| ApiError::not_found("Blog not found"))?;

    tracing::info!("post {} updated by user {}", id, identity.user_id);

    Ok(Json(UpdatePostResponse { id }))
}
