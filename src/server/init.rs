/**
 * Server Initialization
 *
 * This module builds the application from its configuration: connect
 * the connection pool, run migrations, assemble state, and hand off to
 * the router.
 *
 * Unlike degraded-mode designs, a missing or unreachable database is a
 * startup error here; every endpoint needs the store.
 */

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use crate::routes::create_router;
use crate::server::config::Config;
use crate::server::state::{AppState, AuthConfig};

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the pool cannot be created or migrations cannot run.
pub async fn create_app(config: &Config) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("connecting to database");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await?;

    let state = AppState {
        pool,
        auth: AuthConfig::from(config),
    };

    Ok(create_router(state))
}
