//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Token authentication for the account and post routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use blog_api::backend::middleware::auth_middleware;
//! use blog_api::backend::server::state::AppState;
//!
//! let state = AppState::in_memory("secret", 4).unwrap();
//! let protected: Router = Router::new()
//!     .route("/posts", get(|| async { "ok" }))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
//!     .with_state(state);
//! ```

pub mod auth;

pub use auth::{auth_middleware, authenticate, AuthUser, AuthenticatedUser, AUTH_HEADER};
