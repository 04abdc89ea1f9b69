//! Account Handlers Module
//!
//! This module contains the HTTP handlers for account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - Account registration handler
//! ├── login.rs     - Credential check handler
//! ├── profile.rs   - Get current user handler
//! └── log_capture.rs - Captured tracing output (tests only)
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - Create an account, returns a token
//! - **`login`** - POST /login - Check credentials, returns a token
//! - **`get_user`** - POST /getuser - Current user's profile (protected)
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::post, Router};
//! use blog_api::backend::auth::handlers::{login, register};
//! use blog_api::backend::server::state::AppState;
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/register", post(register))
//!     .route("/login", post(login));
//! ```

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod profile;

#[cfg(test)]
pub(crate) mod log_capture;

pub use types::{AuthTokenResponse, LoginRequest, RegisterRequest, UserProfile};

pub use login::login;
pub use profile::get_user;
pub use register::register;
