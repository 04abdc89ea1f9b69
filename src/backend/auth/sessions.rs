/**
 * Session Tokens
 *
 * This module issues and verifies the bearer tokens handed out by register
 * and login. Tokens are HS256 JWTs whose claims carry the user id:
 *
 * ```json
 * { "user": { "id": "<uuid>" }, "iat": 1700000000 }
 * ```
 *
 * Tokens have no expiry. One stays valid until the signing secret changes.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::server::config::ConfigError;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Identity the token was issued for
    pub user: UserClaim,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// User part of the claims
#[derive(Debug, Serialize, Deserialize)]
pub struct UserClaim {
    /// User ID
    pub id: String,
}

/// Reasons a presented token is rejected
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is empty")]
    Missing,

    #[error("token is invalid: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("token subject is not a user id: {0}")]
    InvalidSubject(#[from] uuid::Error),
}

/// Signing and verification keys derived from the process-wide secret
///
/// Built once at startup and shared through `AppState`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    /// Derive keys from the signing secret
    ///
    /// # Errors
    ///
    /// `ConfigError::EmptySecret` if the secret is empty or whitespace.
    pub fn new(secret: &str) -> Result<Self, ConfigError> {
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_aud = false;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Create a token for a user
    ///
    /// # Arguments
    /// * `user_id` - User ID (UUID)
    ///
    /// # Returns
    /// JWT token string
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            user: UserClaim {
                id: user_id.to_string(),
            },
            iat: Utc::now().timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify a token and extract the user id it was issued for
    ///
    /// # Arguments
    /// * `token` - JWT token string
    ///
    /// # Returns
    /// User ID (UUID) or the reason the token was rejected
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TokenError::Missing);
        }

        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(Uuid::parse_str(&token_data.claims.user.id)?)
    }
}
