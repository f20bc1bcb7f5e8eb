//! Server setup and configuration
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs      - Module exports
//! ├── config.rs   - Environment-driven configuration
//! ├── state.rs    - Application state and FromRef impls
//! └── init.rs     - Pool creation, migrations, router assembly
//! ```

/// Environment-driven configuration
pub mod config;

/// Application state
pub mod state;

/// Application assembly
pub mod init;

pub use config::Config;
pub use init::create_app;
pub use state::{AppState, AuthConfig};
