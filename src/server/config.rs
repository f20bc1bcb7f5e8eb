/**
 * Server Configuration
 *
 * This module loads process-wide configuration from the environment,
 * once, at startup. The store connection string and the token-signing
 * secret are required; the service refuses to start without them rather
 * than falling back to a baked-in value.
 *
 * # Variables
 *
 * - `DATABASE_URL` (required) - Postgres connection string
 * - `JWT_SECRET` (required) - HS256 signing secret
 * - `SERVER_PORT` (optional, default 3000)
 * - `TOKEN_TTL_SECS` (optional, default 30 days)
 */

use thiserror::Error;
use crate::auth::tokens::DEFAULT_TOKEN_TTL_SECS;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration loading error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for environment variable {0}")]
    Invalid(&'static str),
}

/// Process-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string
    pub database_url: String,
    /// Token-signing secret
    pub jwt_secret: String,
    /// Listen port
    pub port: u16,
    /// Identity token lifetime in seconds
    pub token_ttl_secs: u64,
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid("SERVER_PORT"))?,
            Err(_) => DEFAULT_PORT,
        };

        let token_ttl_secs = match std::env::var("TOKEN_TTL_SECS") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid("TOKEN_TTL_SECS"))?,
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            token_ttl_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["DATABASE_URL", "JWT_SECRET", "SERVER_PORT", "TOKEN_TTL_SECS"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_missing_database_url_fails() {
        clear_env();
        std::env::set_var("JWT_SECRET", "secret");
        assert_eq!(
            Config::from_env().unwrap_err(),
            ConfigError::Missing("DATABASE_URL")
        );
    }

    #[test]
    #[serial]
    fn test_missing_jwt_secret_fails() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/quillpost");
        assert_eq!(
            Config::from_env().unwrap_err(),
            ConfigError::Missing("JWT_SECRET")
        );
    }

    #[test]
    #[serial]
    fn test_defaults_apply() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/quillpost");
        std::env::set_var("JWT_SECRET", "secret");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.token_ttl_secs, DEFAULT_TOKEN_TTL_SECS);
    }

    #[test]
    #[serial]
    fn test_invalid_port_fails() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/quillpost");
        std::env::set_var("JWT_SECRET", "secret");
        std::env::set_var("SERVER_PORT", "not-a-port");

        assert_eq!(
            Config::from_env().unwrap_err(),
            ConfigError::Invalid("SERVER_PORT")
        );
    }
}
