/**
 * Application State Management
 *
 * This module defines the application state structure handed to every
 * handler.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The user and post stores (Postgres or in-memory, behind traits)
 * - The token signing and verification keys
 * - The password hasher
 *
 * Everything is read-only after startup and cheap to clone.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use blog_api::backend::server::state::AppState;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let posts = state.posts.clone();
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::users::UserStore;
use crate::backend::blog::posts::PostStore;
use crate::backend::server::config::ConfigError;
use crate::backend::store::MemoryStore;

/// Application state shared by all handlers
///
/// # Fields
///
/// * `users` - Credential store
/// * `posts` - Owner-scoped post store
/// * `tokens` - Token signing and verification keys
/// * `hasher` - Password hasher with the configured cost
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub posts: Arc<dyn PostStore>,
    pub tokens: Arc<TokenKeys>,
    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        posts: Arc<dyn PostStore>,
        tokens: TokenKeys,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            posts,
            tokens: Arc::new(tokens),
            hasher,
        }
    }

    /// State backed by a Postgres pool
    pub fn postgres(pool: PgPool, tokens: TokenKeys, hasher: PasswordHasher) -> Self {
        let pool = Arc::new(pool);
        Self::new(pool.clone(), pool, tokens, hasher)
    }

    /// State backed by a fresh in-memory store
    ///
    /// # Arguments
    /// * `secret` - Token signing secret
    /// * `bcrypt_cost` - bcrypt cost factor (tests use 4)
    pub fn in_memory(secret: &str, bcrypt_cost: u32) -> Result<Self, ConfigError> {
        let store = Arc::new(MemoryStore::new());
        Ok(Self::new(
            store.clone(),
            store,
            TokenKeys::new(secret)?,
            PasswordHasher::new(bcrypt_cost)?,
        ))
    }
}

/// Lets handlers extract the token keys alone with `State(Arc<TokenKeys>)`
impl FromRef<AppState> for Arc<TokenKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
