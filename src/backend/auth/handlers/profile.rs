/**
 * Get Profile Handler
 *
 * This module implements the handler for POST /getuser, which returns the
 * currently authenticated user's information.
 *
 * # Authentication
 *
 * Requires a valid token in the `auth-token` header; the auth middleware
 * rejects the request before this handler runs otherwise.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserProfile;
use crate::backend::error::{BackendError, ErrorBody};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Get profile handler
///
/// # Returns
///
/// `{"id", "name", "email"}` of the authenticated user
///
/// # Errors
///
/// * `401 Unauthorized` - Missing or invalid token
/// * `404 Not Found` - The token's user no longer exists
/// * `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/getuser",
    tag = "auth",
    security(("AuthToken" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = UserProfile),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(auth_user): AuthUser,
) -> Result<Json<UserProfile>, BackendError> {
    let user = state
        .users
        .find_by_id(auth_user.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", auth_user.user_id);
            BackendError::not_found("User not found")
        })?;

    Ok(Json(UserProfile::from(user)))
}
