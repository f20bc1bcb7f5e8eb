//! API Error Types
//!
//! This module defines the error taxonomy shared by every handler in the
//! service and its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs          - Module exports
//! ├── types.rs        - ApiError enum and status-code mapping
//! └── conversion.rs   - IntoResponse implementation (JSON bodies)
//! ```

/// Error enum and status-code mapping
pub mod types;

/// Conversion of errors into HTTP responses
pub mod conversion;

pub use types::ApiError;
