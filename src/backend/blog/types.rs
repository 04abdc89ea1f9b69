/**
 * Blog Handler Types
 */

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::backend::blog::posts::PostDraft;

/// Create and update request
///
/// Both fields are required; an update replaces both.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct PostRequest {
    pub title: String,
    pub body: String,
}

impl From<PostRequest> for PostDraft {
    fn from(request: PostRequest) -> Self {
        Self {
            title: request.title,
            body: request.body,
        }
    }
}

/// Confirmation message
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
