/**
 * Blog Routes
 *
 * Every route here sits behind the auth middleware.
 *
 * # Routes
 *
 * - `POST /write` - Create a post
 * - `GET /posts` - List the caller's posts
 * - `GET /posts/{id}` - Get one of the caller's posts
 * - `PUT /post/update/{id}` - Replace title and body
 * - `DELETE /post/delete/{id}` - Delete a post
 */

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::blog::{create_post, delete_post, get_post, list_posts, update_post};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure blog routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
pub fn configure_blog_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/write", post(create_post))
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .route("/post/update/{id}", put(update_post))
        .route("/post/delete/{id}", delete(delete_post))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router.merge(protected)
}
