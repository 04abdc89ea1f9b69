/**
 * Post Model and Post Store
 *
 * Every read and write is scoped to an owner id. A post that exists but
 * belongs to someone else looks exactly like a post that does not exist.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::backend::store::StoreError;

/// Blog post
///
/// Serialized as `{"id", "title", "body", "user"}` where `user` is the
/// owner's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Post {
    /// Post ID (UUID)
    pub id: Uuid,
    pub title: String,
    pub body: String,
    /// Owner's user ID
    #[sqlx(rename = "user_id")]
    pub user: Uuid,
}

/// Title and body supplied on create and update
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

impl PostDraft {
    pub fn into_post(self, owner: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: self.title,
            body: self.body,
            user: owner,
        }
    }
}

/// Owner-scoped post store
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a new post owned by `owner`
    async fn create(&self, owner: Uuid, draft: PostDraft) -> Result<Post, StoreError>;

    /// All posts owned by `owner`, oldest first
    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Post>, StoreError>;

    /// The post with this id, if `owner` owns it
    async fn find_owned(&self, id: Uuid, owner: Uuid) -> Result<Option<Post>, StoreError>;

    /// Replace title and body of a post `owner` owns
    ///
    /// # Returns
    /// The updated post, or `None` if no such post is owned by `owner`
    async fn update_owned(
        &self,
        id: Uuid,
        owner: Uuid,
        draft: PostDraft,
    ) -> Result<Option<Post>, StoreError>;

    /// Delete a post `owner` owns
    ///
    /// # Returns
    /// `true` if a post was removed
    async fn delete_owned(&self, id: Uuid, owner: Uuid) -> Result<bool, StoreError>;
}

#[async_trait]
impl PostStore for PgPool {
    async fn create(&self, owner: Uuid, draft: PostDraft) -> Result<Post, StoreError> {
        let post = draft.into_post(owner);

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, title, body, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, body, user_id
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.body)
        .bind(post.user)
        .fetch_one(self)
        .await?;

        Ok(post)
    }

    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Post>, StoreError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, body, user_id
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(owner)
        .fetch_all(self)
        .await?;

        Ok(posts)
    }

    async fn find_owned(&self, id: Uuid, owner: Uuid) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, body, user_id
            FROM posts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(self)
        .await?;

        Ok(post)
    }

    async fn update_owned(
        &self,
        id: Uuid,
        owner: Uuid,
        draft: PostDraft,
    ) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $3, body = $4
            WHERE id = $1 AND user_id = $2
            RETURNING id, title, body, user_id
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(&draft.title)
        .bind(&draft.body)
        .fetch_optional(self)
        .await?;

        Ok(post)
    }

    async fn delete_owned(&self, id: Uuid, owner: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .execute(self)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
