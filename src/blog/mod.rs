//! Blog Module
//!
//! Post data and the CRUD handlers over it. Creation binds the
//! authenticated identity as the post's owner; update is owner-scoped.
//!
//! # Module Structure
//!
//! ```text
//! blog/
//! ├── mod.rs          - Module exports
//! ├── posts.rs        - Post model and store operations
//! └── handlers/       - HTTP handlers (create, list, get, update)
//! ```

/// Post model and store operations
pub mod posts;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use posts::{Post, PostWithAuthor};
