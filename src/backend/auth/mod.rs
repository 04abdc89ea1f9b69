//! Authentication Module
//!
//! This module handles account registration, login and token management.
//!
//! # Architecture
//!
//! - **`users`** - User model and the `UserStore` trait
//! - **`password`** - bcrypt hashing with a configured cost
//! - **`sessions`** - Token issuing and verification
//! - **`handlers`** - HTTP handlers for the account endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and credential store
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - Token management
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Get User**: token in `auth-token` header → token verified → profile returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless HS256 JWTs with no expiry
//! - Unknown email and wrong password return the same 400 response

/// User data model and credential store
pub mod users;

/// Password hashing
pub mod password;

/// Token generation and validation
pub mod sessions;

/// HTTP handlers for account endpoints
pub mod handlers;

pub use handlers::{get_user, login, register};
pub use password::PasswordHasher;
pub use sessions::{TokenError, TokenKeys};
pub use users::{NewUser, User, UserStore};
