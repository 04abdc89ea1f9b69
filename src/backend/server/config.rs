/**
 * Server Configuration
 *
 * This module loads and validates the server configuration from the
 * process environment (after `.env` has been applied by `main`).
 *
 * # Variables
 *
 * | Variable       | Required | Default | Meaning                                |
 * |----------------|----------|---------|----------------------------------------|
 * | `JWT_SECRET`   | yes      |         | HS256 signing secret, non-empty        |
 * | `DATABASE_URL` | no       |         | Postgres URL; in-memory store if unset |
 * | `PORT`         | no       | 3001    | Listen port                            |
 * | `BCRYPT_COST`  | no       | 10      | bcrypt cost, 4..=31                    |
 *
 * # Error Handling
 *
 * A missing secret or an unparsable value stops startup. A missing
 * `DATABASE_URL` only logs a warning; a database that is configured but
 * unreachable is fatal.
 */

use std::fmt;

use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::store::StoreError;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3001;

/// Configuration errors detected at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("JWT_SECRET must not be empty")]
    EmptySecret,

    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("bcrypt cost must be between 4 and 31, got {0}")]
    InvalidCost(u32),
}

/// Validated server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Postgres connection URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Token signing secret
    pub jwt_secret: String,
    /// Listen port
    pub port: u16,
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Arguments
    /// * `lookup` - Returns the value of a variable, or `None` if unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?;
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { var: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "BCRYPT_COST",
                    value,
                })?,
            None => PasswordHasher::DEFAULT_COST,
        };
        PasswordHasher::new(bcrypt_cost)?;

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            bcrypt_cost,
        })
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("jwt_secret", &"<redacted>")
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

/// Connect to Postgres and bring the schema up to date
///
/// This function:
/// 1. Creates a PostgreSQL connection pool
/// 2. Runs the embedded migrations from `migrations/`
///
/// # Errors
///
/// Connection or migration failures are returned to the caller and abort
/// startup.
pub async fn load_database(database_url: &str) -> Result<PgPool, StoreError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
