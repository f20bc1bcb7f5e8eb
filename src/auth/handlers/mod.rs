//! Account Handlers Module
//!
//! HTTP handlers for the account endpoints.
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/v1/user/signup - Registration
//! - **`signin`** - POST /api/v1/user/signin - Authentication
//! - **`details`** - GET /api/v1/user/details - Current user info (authenticated)

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

/// Current user details handler
pub mod details;

pub use types::{SigninRequest, SignupRequest, TokenResponse, UserDetailsResponse};

pub use details::details;
pub use signin::signin;
pub use signup::signup;
