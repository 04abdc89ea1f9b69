//! Blog API - Main Library
//!
//! A small blogging backend: account registration and login with bcrypt-hashed
//! credentials and JWT issuance, plus per-user CRUD over blog posts behind
//! token authentication.
//!
//! # Module Structure
//!
//! - **`backend`** - Axum HTTP server, handlers, middleware and stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use blog_api::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `backend::error::BackendError` for everything that reaches an HTTP response
//! - `backend::store::StoreError` for persistence failures

/// Backend server-side code
pub mod backend;
