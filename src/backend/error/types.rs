/**
 * Backend Error Types
 *
 * This module defines the error type used by handlers and middleware.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Errors raised by handler logic with an explicit status code:
 * - Duplicate email, wrong credentials (400)
 * - Missing posts or users (404)
 *
 * ## Authentication Errors
 *
 * A missing, malformed or forged token. Every cause renders the same 401
 * body so callers cannot tell them apart.
 *
 * ## Internal Errors
 *
 * Store, hashing and token-signing failures. The detail is logged and the
 * client only sees a generic message.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;

/// Message sent for every rejected token
pub const UNAUTHORIZED_MESSAGE: &str = "Please authenticate using a valid token";

/// Message sent for every internal failure
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Message sent when the email is already registered
pub const EMAIL_IN_USE_MESSAGE: &str = "Email already in use";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use blog_api::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Wrong Credentials");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::not_found("Post not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (validation, conflict, not found)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Missing or invalid authentication token
    #[error("Unauthorized")]
    Unauthorized,

    /// Request body could not be parsed into the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Password hashing or verification failure
    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token signing error: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a 400 Bad Request handler error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// Create a 404 Not Found handler error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Unauthorized` - 401 Unauthorized
    /// - `InvalidBody` - 400 Bad Request
    /// - `Store(DuplicateEmail)` - 400 Bad Request
    /// - Everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::DuplicateEmail) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Password(_) | Self::TokenSigning(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    ///
    /// Internal failures never leak their detail.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
            Self::InvalidBody(message) => message.clone(),
            Self::Store(StoreError::DuplicateEmail) => EMAIL_IN_USE_MESSAGE.to_string(),
            Self::Store(_) | Self::Password(_) | Self::TokenSigning(_) => {
                INTERNAL_MESSAGE.to_string()
            }
        }
    }
}
