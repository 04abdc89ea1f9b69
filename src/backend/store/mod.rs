//! Store Module
//!
//! Shared pieces of the persistence layer. The store traits live next to the
//! records they persist (`auth::users::UserStore`, `blog::posts::PostStore`);
//! both are implemented for `sqlx::PgPool` there and for [`MemoryStore`] here.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - StoreError and exports
//! └── memory.rs   - In-memory implementation of both stores
//! ```

use thiserror::Error;

/// In-memory store used for development and tests
pub mod memory;

pub use memory::MemoryStore;

/// Errors raised by the user and post stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this email already exists
    ///
    /// Raised by the store itself, so two concurrent registrations with the
    /// same email cannot both succeed.
    #[error("Email already registered")]
    DuplicateEmail,

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    /// Map an insert failure, turning a unique-key violation into
    /// [`StoreError::DuplicateEmail`]
    pub fn from_insert(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::DuplicateEmail
            }
            other => Self::Database(other),
        }
    }
}
