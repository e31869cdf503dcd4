use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::RepoError;

/// Post repository - the storage port behind every HTTP operation.
///
/// Each method maps to exactly one statement against the store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in insertion (id) order.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Persist a new post and return it with the assigned id.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite title, content and `updated_at`.
    /// Returns `false` when no row has that id.
    async fn update(&self, id: i64, changes: &PostChanges) -> Result<bool, RepoError>;

    /// Hard-delete a post. Returns `false` when no row has that id.
    async fn delete(&self, id: i64) -> Result<bool, RepoError>;
}
