/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including store selection, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Derive token keys and the password hasher from the configuration
 * 2. Connect to Postgres and run migrations, or fall back to the
 *    in-memory store when `DATABASE_URL` is not set
 * 3. Create the router with all routes
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, StoreError};

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Build the application state for a configuration
///
/// # Errors
///
/// An invalid secret or cost, or a configured database that cannot be
/// reached or migrated.
pub async fn create_state(config: &ServerConfig) -> Result<AppState, InitError> {
    let tokens = TokenKeys::new(&config.jwt_secret)?;
    let hasher = PasswordHasher::new(config.bcrypt_cost)?;

    let state = match &config.database_url {
        Some(url) => {
            let pool = load_database(url).await?;
            AppState::postgres(pool, tokens, hasher)
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using the in-memory store; data is lost on restart.");
            let store = Arc::new(MemoryStore::new());
            AppState::new(store.clone(), store, tokens, hasher)
        }
    };

    Ok(state)
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing blog backend server");

    let app_state = create_state(config).await?;
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
