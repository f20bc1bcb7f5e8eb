//! Middleware for request processing
//!
//! Currently a single member: the authentication gate applied to every
//! protected route.

/// Authentication gate
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
