//! Blog Handlers Module
//!
//! HTTP handlers for the post endpoints. All four sit behind the auth
//! gate.
//!
//! # Handlers
//!
//! - **`create`** - POST /api/v1/blog/blog-post
//! - **`list`** - GET /api/v1/blog/bulk
//! - **`get`** - GET /api/v1/blog/blog/{id}
//! - **`update`** - PUT /api/v1/blog/post-update (owner only)

/// Request and response types
pub mod types;

/// Create handler
pub mod create;

/// List handler
pub mod list;

/// Get-by-id handler
pub mod get;

/// Update handler
pub mod update;

pub use types::{
    AuthorResponse, CreatePostRequest, CreatePostResponse, PostListResponse, PostResponse,
    UpdatePostRequest, UpdatePostResponse,
};

pub use create::create;
pub use get::get;
pub use list::list;
pub use update::update;
