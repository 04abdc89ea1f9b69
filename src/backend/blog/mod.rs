//! Blog Module
//!
//! Blog posts and their owner-scoped CRUD handlers.
//!
//! # Module Structure
//!
//! ```text
//! blog/
//! ├── mod.rs       - Module exports
//! ├── posts.rs     - Post model and the `PostStore` trait
//! ├── types.rs     - Request and response types
//! └── handlers.rs  - HTTP handlers
//! ```

/// Post model and post store
pub mod posts;

/// Request and response types
pub mod types;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use handlers::{create_post, delete_post, get_post, list_posts, update_post};
pub use posts::{Post, PostDraft, PostStore};
pub use types::{MessageResponse, PostRequest};
