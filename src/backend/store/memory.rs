/**
 * In-Memory Store
 *
 * Implements both `UserStore` and `PostStore` on top of tokio `RwLock`s.
 * Used when `DATABASE_URL` is not set and by the test suite.
 *
 * Posts are kept in a `Vec` so listing returns them in insertion order.
 * The email uniqueness check and the insert happen under one write lock.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User, UserStore};
use crate::backend::blog::posts::{Post, PostDraft, PostStore};
use crate::backend::store::StoreError;

/// Process-local user and post storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    posts: RwLock<Vec<Post>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|user| user.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = new_user.into_user();
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn create(&self, owner: Uuid, draft: PostDraft) -> Result<Post, StoreError> {
        let post = draft.into_post(owner);
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().filter(|post| post.user == owner).cloned().collect())
    }

    async fn find_owned(&self, id: Uuid, owner: Uuid) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .find(|post| post.id == id && post.user == owner)
            .cloned())
    }

    async fn update_owned(
        &self,
        id: Uuid,
        owner: Uuid,
        draft: PostDraft,
    ) -> Result<Option<Post>, StoreError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts
            .iter_mut()
            .find(|post| post.id == id && post.user == owner)
        else {
            return Ok(None);
        };

        post.title = draft.title;
        post.body = draft.body;
        Ok(Some(post.clone()))
    }

    async fn delete_owned(&self, id: Uuid, owner: Uuid) -> Result<bool, StoreError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|post| !(post.id == id && post.user == owner));
        Ok(posts.len() < before)
    }
}
