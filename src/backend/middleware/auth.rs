/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It reads the raw token from the `auth-token`
 * header, verifies it and provides the user ID to handlers.
 *
 * A missing header and a bad token produce the same 401 response.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::error::BackendError;

/// Header carrying the session token
pub const AUTH_HEADER: &str = "auth-token";

/// Authenticated user data extracted from the token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Resolve the caller's identity from request headers
///
/// # Arguments
/// * `headers` - Request headers
/// * `keys` - Token verification keys
///
/// # Returns
/// The authenticated user, or `BackendError::Unauthorized`
pub fn authenticate(headers: &HeaderMap, keys: &TokenKeys) -> Result<AuthenticatedUser, BackendError> {
    let token = headers
        .get(AUTH_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing {} header", AUTH_HEADER);
            BackendError::Unauthorized
        })?;

    let user_id = keys.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::Unauthorized
    })?;

    Ok(AuthenticatedUser { user_id })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the token from the `auth-token` header
/// 2. Verifies it against the server's signing secret
/// 3. Attaches the user to request extensions for use in handlers
///
/// Returns 401 Unauthorized if the token is missing or invalid; the
/// wrapped handler does not run. Installed with `AppState` as its state;
/// the keys are pulled out through `FromRef`.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(request.headers(), &tokens)?;
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Reads the identity `auth_middleware` attached. On a route without the
/// middleware it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}
