/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Service banner (`GET /`)
 * 2. Account routes (register, login, getuser)
 * 3. Blog routes (post CRUD)
 * 4. API documentation (Swagger UI and OpenAPI JSON)
 *
 * Protected routes carry their own `route_layer`, so the auth middleware
 * never runs for public routes or unknown paths.
 */

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::backend::routes::account_routes::configure_account_routes;
use crate::backend::routes::blog_routes::configure_blog_routes;
use crate::backend::routes::docs::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::backend::server::state::AppState;

/// Banner returned by `GET /`
pub const BANNER: &str = "Blog API is running";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Stores, token keys and hasher
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(|| async { BANNER }));

    let router = configure_account_routes(router, &app_state);
    let router = configure_blog_routes(router, &app_state);

    let router = router
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()));

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
