/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Reject blank name, email or password
 * 2. Check if the email is already registered
 * 3. Hash password using bcrypt
 * 4. Create the user in the store
 * 5. Issue a token and return it
 *
 * The store enforces email uniqueness again on insert, so a registration
 * racing past step 2 still gets the "Email already in use" response.
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthTokenResponse, RegisterRequest};
use crate::backend::auth::users::NewUser;
use crate::backend::error::types::EMAIL_IN_USE_MESSAGE;
use crate::backend::error::{BackendError, ErrorBody};
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Arguments
///
/// * `State(state)` - Application state (stores, hasher, token keys)
/// * `payload` - Register request containing name, email and password
///
/// # Returns
///
/// JSON response with the new user's token
///
/// # Errors
///
/// * `400 Bad Request` - Body is malformed, a field is blank, or the email is taken
/// * `500 Internal Server Error` - Store, hashing or token failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ada",
///   "email": "ada@example.com",
///   "password": "securepassword123"
/// }
/// ```
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = AuthTokenResponse),
        (status = 400, description = "Invalid body or email already in use", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthTokenResponse>, BackendError> {
    let Json(request) = payload?;

    for (field, value) in [
        ("name", &request.name),
        ("email", &request.email),
        ("password", &request.password),
    ] {
        if value.trim().is_empty() {
            tracing::warn!("Register rejected: blank {}", field);
            return Err(BackendError::bad_request(format!("{} is required", field)));
        }
    }

    if state.users.find_by_email(&request.email).await?.is_some() {
        tracing::warn!("Register rejected: email already in use");
        return Err(BackendError::bad_request(EMAIL_IN_USE_MESSAGE));
    }

    let password_hash = state.hasher.hash(&request.password)?;

    let user = state
        .users
        .insert(NewUser {
            name: request.name,
            email: request.email,
            password_hash,
        })
        .await?;

    let authtoken = state.tokens.issue(user.id)?;

    tracing::info!("User registered: {}", user.id);

    Ok(Json(AuthTokenResponse { authtoken }))
}
