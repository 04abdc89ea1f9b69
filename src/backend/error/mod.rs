//! Backend Error Module
//!
//! This module defines the error type returned by every handler and by the
//! authentication middleware.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Categories
//!
//! - **Validation/conflict** - 400, recoverable by retrying with other input
//! - **Authorization** - 401, the request never reaches a handler
//! - **Not found** - 404, also used for resources owned by someone else
//! - **Internal** - 500, logged, rendered with a generic message
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so handlers return
//! `Result<Json<T>, BackendError>` and use `?` throughout.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::ErrorBody;
pub use types::BackendError;
