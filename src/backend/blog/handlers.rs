/**
 * Post Handlers
 *
 * CRUD handlers for blog posts. Every route is protected by the auth
 * middleware and every store call is scoped to the caller's user id, so a
 * post owned by someone else answers 404 exactly like a missing one.
 *
 * # Routes
 *
 * - `POST /write` - Create a post
 * - `GET /posts` - List the caller's posts
 * - `GET /posts/{id}` - Get one post
 * - `PUT /post/update/{id}` - Replace title and body
 * - `DELETE /post/delete/{id}` - Delete a post
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::backend::blog::posts::Post;
use crate::backend::blog::types::{MessageResponse, PostRequest};
use crate::backend::error::{BackendError, ErrorBody};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

const POST_NOT_FOUND: &str = "Post not found";

/// Parse a post id from the path; anything that is not a UUID cannot match
fn parse_post_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::not_found(POST_NOT_FOUND))
}

/// Create post handler
#[utoipa::path(
    post,
    path = "/write",
    tag = "posts",
    security(("AuthToken" = [])),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Created post", body = Post),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(auth_user): AuthUser,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<Json<Post>, BackendError> {
    let Json(request) = payload?;

    let post = state
        .posts
        .create(auth_user.user_id, request.into())
        .await?;

    tracing::info!("Post {} created by {}", post.id, auth_user.user_id);

    Ok(Json(post))
}

/// List posts handler
///
/// # Returns
///
/// All of the caller's posts, oldest first; an empty array if there are none
#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    security(("AuthToken" = [])),
    responses(
        (status = 200, description = "The caller's posts", body = [Post]),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
    AuthUser(auth_user): AuthUser,
) -> Result<Json<Vec<Post>>, BackendError> {
    let posts = state.posts.list_for_owner(auth_user.user_id).await?;
    Ok(Json(posts))
}

/// Get post handler
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    security(("AuthToken" = [])),
    params(("id" = String, Path, description = "Post ID")),
    responses(
        (status = 200, description = "The post", body = Post),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "Post not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    AuthUser(auth_user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Post>, BackendError> {
    let id = parse_post_id(&id)?;

    state
        .posts
        .find_owned(id, auth_user.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))
}

/// Update post handler
///
/// Replaces both title and body; a request missing either is rejected.
#[utoipa::path(
    put,
    path = "/post/update/{id}",
    tag = "posts",
    security(("AuthToken" = [])),
    params(("id" = String, Path, description = "Post ID")),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Updated post", body = Post),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "Post not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(auth_user): AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<Json<Post>, BackendError> {
    let id = parse_post_id(&id)?;
    let Json(request) = payload?;

    let post = state
        .posts
        .update_owned(id, auth_user.user_id, request.into())
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    tracing::info!("Post {} updated by {}", post.id, auth_user.user_id);

    Ok(Json(post))
}

/// Delete post handler
#[utoipa::path(
    delete,
    path = "/post/delete/{id}",
    tag = "posts",
    security(("AuthToken" = [])),
    params(("id" = String, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "Post not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(auth_user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let id = parse_post_id(&id)?;

    if !state.posts.delete_owned(id, auth_user.user_id).await? {
        return Err(BackendError::not_found(POST_NOT_FOUND));
    }

    tracing::info!("Post {} deleted by {}", id, auth_user.user_id);

    Ok(Json(MessageResponse {
        message: "Post deleted successfully".to_string(),
    }))
}
