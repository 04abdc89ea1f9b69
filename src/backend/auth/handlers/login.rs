/**
 * Login Handler
 *
 * This module implements the login handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a token and return it
 *
 * An unknown email and a wrong password get the same response.
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthTokenResponse, LoginRequest};
use crate::backend::error::{BackendError, ErrorBody};
use crate::backend::server::state::AppState;

const WRONG_CREDENTIALS: &str = "Wrong Credentials";

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state
/// * `payload` - Login request containing email and password
///
/// # Returns
///
/// JSON response with a fresh token
///
/// # Errors
///
/// * `400 Bad Request` - Body is malformed, or the credentials do not match
/// * `500 Internal Server Error` - Store, hashing or token failure
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthTokenResponse),
        (status = 400, description = "Wrong credentials or invalid body", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthTokenResponse>, BackendError> {
    let Json(request) = payload?;

    let Some(user) = state.users.find_by_email(&request.email).await? else {
        tracing::warn!("Login failed: unknown email");
        return Err(BackendError::bad_request(WRONG_CREDENTIALS));
    };

    if !state.hasher.verify(&request.password, &user.password_hash)? {
        tracing::warn!("Login failed: wrong password for {}", user.id);
        return Err(BackendError::bad_request(WRONG_CREDENTIALS));
    }

    let authtoken = state.tokens.issue(user.id)?;

    tracing::info!("User logged in: {}", user.id);

    Ok(Json(AuthTokenResponse { authtoken }))
}
