/**
 * Get Post Handler
 *
 * Implements GET /api/v1/blog/blog/{id}. The path segment is parsed
 * before any store access: a non-numeric id is a 400, not a store
 * round-trip.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use crate::blog::handlers::types::PostResponse;
use crate::blog::posts::find_post_by_id;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Get post by id handler
///
/// # Errors
///
/// * `400 Bad Request` - non-numeric or non-positive id
/// * `401 Unauthorized` - rejected by the gate
/// * `404 Not Found` - no post with this id
/// * `500 Internal Server Error` - store failure
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>, ApiError> {
    let id: i64 = id
        .parse()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::invalid_input("Invalid blog ID"))?;

    let post = find_post_by_id(&state.pool, id)
        .await
        .map_err(|e| {
            tracing::error!("failed to fetch post {id}: {e:?}");
            ApiError::Internal
        })?
        .ok_or_else(|| ApiError::not_found("Blog not found"))?;

    Ok(Json(PostResponse::from(post)))
}
