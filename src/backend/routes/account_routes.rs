/**
 * Account Routes
 *
 * # Routes
 *
 * - `POST /register` - Create an account (public)
 * - `POST /login` - Exchange credentials for a token (public)
 * - `POST /getuser` - Current user's profile (requires `auth-token`)
 */

use axum::{middleware, routing::post, Router};

use crate::backend::auth::{get_user, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure account routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
///
/// # Returns
///
/// Router with account routes configured
pub fn configure_account_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/getuser", post(get_user))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
}
