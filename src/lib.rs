//! Quillpost - Blogging Backend
//!
//! A minimal blogging backend: account registration and login with
//! credential verification, and CRUD access to blog posts gated by a
//! bearer-token identity check.
//!
//! # Overview
//!
//! - **`server`** - Configuration, application state, app assembly
//! - **`routes`** - Route table under /api/v1
//! - **`auth`** - Accounts, credential hashing, identity tokens
//! - **`middleware`** - The auth gate applied to protected routes
//! - **`blog`** - Post data and CRUD handlers
//! - **`error`** - Error taxonomy and HTTP mapping
//!
//! # Request Flow
//!
//! inbound request → auth gate (protected routes) → handler → Postgres
//! → JSON response. Requests are handled independently; the connection
//! pool is the only shared resource, and all coordination (email
//! uniqueness, update atomicity) is delegated to the database.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Accounts, credential hashing, identity tokens
pub mod auth;

/// Request middleware (auth gate)
pub mod middleware;

/// Blog posts and their handlers
pub mod blog;

/// Error taxonomy
pub mod error;

pub use error::ApiError;
pub use server::{create_app, AppState, Config};
