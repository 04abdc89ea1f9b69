/**
 * User Model and Credential Store
 *
 * This module defines the account record and the store that persists it.
 * Handlers only see `User`; the Postgres row shape stays in this file.
 */

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::store::StoreError;

/// User record as persisted by the credential store
///
/// Not `Serialize`: the password hash must never reach a
/// response. Handlers convert to `UserProfile` instead.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address, unique across users
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
}

/// Data required to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Assign a fresh identifier, producing the record to persist
    pub fn into_user(self) -> User {
        User {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}

/// Credential store
///
/// `insert` must fail with [`StoreError::DuplicateEmail`] when the email is
/// taken, even if the caller already checked with `find_by_email`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Get user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Create a new user
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError>;
}

#[async_trait]
impl UserStore for PgPool {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self)
        .await?;

        Ok(user)
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user = new_user.into_user();

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(self)
        .await
        .map_err(StoreError::from_insert)
    }
}
