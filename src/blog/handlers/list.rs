/**
 * List Posts Handler
 *
 * Implements GET /api/v1/blog/bulk. Returns every post with the
 * minimal projection (id, title, content, published, author name).
 * The result set is unbounded, matching the original service; that is
 * a scalability gap, not a correctness one.
 */

use axum::{extract::State, response::Json};
use crate::blog::handlers::types::{PostListResponse, PostResponse};
use crate::blog::posts::list_posts;
use crate::error::ApiError;
use crate::server::state::AppState;

/// List posts handler
pub async fn list(State(state): State<AppState>) -> Result<Json<PostListResponse>, ApiError> {
    let posts = list_posts(&state.pool).await.map_err(|e| {
        tracing::error!("failed to list posts: {e:?}");
        ApiError::Internal
    })?;

    Ok(Json(PostListResponse {
        blogs: posts.into_iter().map(PostResponse::from).collect(),
    }))
}
