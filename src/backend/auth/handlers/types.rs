/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * register, login and profile handlers.
 */

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::backend::auth::users::User;

/// Register request
///
/// All three fields are required and must not be blank.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// User's email address, unique across accounts
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

/// Token returned by register and login
///
/// Clients send it back verbatim in the `auth-token` header.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct AuthTokenResponse {
    pub authtoken: String,
}

/// Public view of a user, without the password hash
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
