//! Backend Module
//!
//! This module contains all server-side code for the blog API.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state and initialization
//! - **`routes`** - Route configuration, router assembly and API documentation
//! - **`auth`** - Accounts, password hashing, JWT tokens and account handlers
//! - **`blog`** - Blog post model, store and owner-scoped handlers
//! - **`middleware`** - Token authentication middleware
//! - **`store`** - Store errors and the in-memory store
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Configuration, state, initialization
//! ├── routes/         - Route configuration and OpenAPI document
//! ├── auth/           - Accounts and tokens
//! ├── blog/           - Blog posts
//! ├── middleware/     - Request middleware
//! ├── store/          - Store errors, in-memory store
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! inbound request → CORS/trace layers → auth middleware (protected routes)
//! → handler → store → JSON response
//!
//! # State Management
//!
//! `AppState` holds the user and post stores behind trait objects, the token
//! keys and the password hasher. Everything in it is read-only after startup
//! and cheap to clone.

pub mod server;
pub mod routes;
pub mod auth;
pub mod blog;
pub mod middleware;
pub mod store;
pub mod error;
