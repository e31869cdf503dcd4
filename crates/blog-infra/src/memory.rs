//! In-memory post repository - used when the `sqlite` feature is disabled
//! and as a lightweight store in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::RepoError;
use blog_core::domain::{NewPost, Post, PostChanges};
use blog_core::ports::PostRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Post>,
    last_id: i64,
}

/// In-memory post store behaving like the SQLite table: ids are never reused
/// and NULL title or content is rejected on update.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_null(column: &str) -> RepoError {
    RepoError::Constraint(format!("NOT NULL constraint failed: posts.{column}"))
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let post = new_post.into_post(table.last_id);
        table.rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: i64, changes: &PostChanges) -> Result<bool, RepoError> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(false);
        };

        let title = changes.title.clone().ok_or_else(|| not_null("title"))?;
        let content = changes.content.clone().ok_or_else(|| not_null("content"))?;

        row.title = title;
        row.content = content;
        row.updated_at = Some(changes.updated_at.clone());
        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }
}
