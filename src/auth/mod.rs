//! Authentication Module
//!
//! This module handles user accounts, credential hashing, and identity
//! tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── password.rs     - Credential hashing (bcrypt)
//! ├── tokens.rs       - Identity token issue/verify (JWT)
//! ├── users.rs        - User model and store operations
//! └── handlers/       - HTTP handlers (signup, signin, details)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name/email/password → user created → token returned
//! 2. **Signin**: email/password → digest verified → token returned
//! 3. **Protected request**: `Authorization: Bearer <token>` → auth gate
//!    verifies the token and binds the caller's identity to the request
//!
//! # Security
//!
//! - Passwords are stored only as bcrypt digests
//! - Tokens are stateless HS256 JWTs carrying only the user id
//! - Signin failures never reveal whether the email exists

/// Credential hashing
pub mod password;

/// Identity token issue and verification
pub mod tokens;

/// User model and store operations
pub mod users;

/// HTTP handlers for account endpoints
pub mod handlers;

pub use handlers::{SigninRequest, SignupRequest, TokenResponse, UserDetailsResponse};
pub use handlers::{details, signin, signup};
