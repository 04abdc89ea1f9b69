/**
 * OpenAPI Documentation
 *
 * Builds the OpenAPI document from the handler annotations. It is served
 * as JSON at `/api-docs/openapi.json` and rendered by Swagger UI at
 * `/api-doc`.
 */

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::backend::auth::handlers::types::{
    AuthTokenResponse, LoginRequest, RegisterRequest, UserProfile,
};
use crate::backend::blog::posts::Post;
use crate::backend::blog::types::{MessageResponse, PostRequest};
use crate::backend::error::ErrorBody;
use crate::backend::middleware::AUTH_HEADER;

/// Path of the generated JSON document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Path of the Swagger UI
pub const SWAGGER_UI_PATH: &str = "/api-doc";

/// Registers the `auth-token` header scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "AuthToken",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                AUTH_HEADER,
                "Token returned by POST /register or POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the blog API
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Blog API",
        description = "Accounts with token authentication and owner-scoped blog posts."
    ),
    paths(
        crate::backend::auth::handlers::register::register,
        crate::backend::auth::handlers::login::login,
        crate::backend::auth::handlers::profile::get_user,
        crate::backend::blog::handlers::create_post,
        crate::backend::blog::handlers::list_posts,
        crate::backend::blog::handlers::get_post,
        crate::backend::blog::handlers::update_post,
        crate::backend::blog::handlers::delete_post,
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        AuthTokenResponse,
        UserProfile,
        Post,
        PostRequest,
        MessageResponse,
        ErrorBody,
    )),
    tags(
        (name = "auth", description = "Registration, login and the current user"),
        (name = "posts", description = "The caller's blog posts")
    )
)]
pub struct ApiDoc;
