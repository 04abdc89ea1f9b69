//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs             - Module exports and documentation
//! ├── router.rs          - Main router creation and shared layers
//! ├── account_routes.rs  - Register, login, getuser
//! ├── blog_routes.rs     - Post CRUD
//! └── docs.rs            - OpenAPI document
//! ```
//!
//! # Route Types
//!
//! ## Account Routes
//!
//! - `POST /register` - Create an account
//! - `POST /login` - Log in
//! - `POST /getuser` - Current user (token required)
//!
//! ## Blog Routes (token required)
//!
//! - `POST /write`
//! - `GET /posts`
//! - `GET /posts/{id}`
//! - `PUT /post/update/{id}`
//! - `DELETE /post/delete/{id}`
//!
//! ## Documentation
//!
//! - `GET /api-doc` - Swagger UI
//! - `GET /api-docs/openapi.json` - OpenAPI document
//!
//! # Example
//!
//! ```rust,no_run
//! use blog_api::backend::routes::create_router;
//! use blog_api::backend::server::state::AppState;
//!
//! let app_state = AppState::in_memory("secret", 10).unwrap();
//! let router = create_router(app_state);
//! ```

/// Main router creation
pub mod router;

/// Account routes
pub mod account_routes;

/// Blog routes
pub mod blog_routes;

/// OpenAPI document
pub mod docs;

pub use docs::ApiDoc;
pub use router::create_router;
