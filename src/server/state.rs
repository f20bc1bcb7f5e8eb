/**
 * Application State Management
 *
 * This module defines the shared state handed to every handler, plus
 * the `FromRef` implementations that let handlers extract only the part
 * they need.
 *
 * # Thread Safety
 *
 * `PgPool` is internally reference-counted and safe to clone per
 * request; the pool is the only shared mutable resource in the service.
 * Constructing it once here (instead of per request) is what gives
 * every handler pooled connections with scoped acquisition and release.
 */

use axum::extract::FromRef;
use sqlx::PgPool;
use crate::server::config::Config;

/// Token-signing configuration shared by the gate and the account handlers
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Identity token lifetime in seconds
    pub token_ttl_secs: u64,
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            token_ttl_secs: config.token_ttl_secs,
        }
    }
}

/// Application state
///
/// # Fields
///
/// * `pool` - Postgres connection pool, shared across requests
/// * `auth` - Token-signing secret and TTL
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth: AuthConfig,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
