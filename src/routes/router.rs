/**
 * Router Configuration
 *
 * This module assembles the full route table under /api/v1.
 *
 * # Route Details
 *
 * ## Public
 * - `POST /api/v1/user/signup` - Registration
 * - `POST /api/v1/user/signin` - Authentication
 *
 * ## Protected (auth gate)
 * - `GET  /api/v1/user/details` - Current user info
 * - `POST /api/v1/blog/blog-post` - Create post
 * - `GET  /api/v1/blog/bulk` - List posts
 * - `GET  /api/v1/blog/blog/{id}` - Get post by id
 * - `PUT  /api/v1/blog/post-update` - Update own post
 *
 * A permissive CORS layer and request tracing wrap the whole router.
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use crate::auth::handlers::{details, signin, signup};
use crate::blog::handlers;
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/user/signup", post(signup))
        .route("/user/signin", post(signin));

    let protected = Router::new()
        .route("/user/details", get(details))
        .route("/blog/blog-post", post(handlers::create))
        .route("/blog/bulk", get(handlers::list))
        .route("/blog/blog/{id}", get(handlers::get))
        .route("/blog/post-update", put(handlers::update))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/api/v1", public.merge(protected))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
