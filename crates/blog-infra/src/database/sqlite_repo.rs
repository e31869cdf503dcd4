//! SQLite repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, RuntimeErr};

use blog_core::RepoError;
use blog_core::domain::{NewPost, Post, PostChanges};
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// SeaORM-backed post repository.
pub struct SqlitePostRepository {
    pub(crate) db: DbConn,
}

impl SqlitePostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DbConn {
        &self.db
    }
}

/// The database's own message, without SeaORM's and sqlx's prefixes.
fn engine_message(err: &DbErr) -> Option<String> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e))) => {
            Some(e.message().to_string())
        }
        _ => None,
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    if matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) {
        return RepoError::Connection(err.to_string());
    }

    let msg = engine_message(&err).unwrap_or_else(|| err.to_string());
    if msg.contains("constraint failed") {
        RepoError::Constraint(msg)
    } else {
        RepoError::Query(msg)
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = rows.len(), "Listed posts");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = id, "Finding post by id");

        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(&new_post);
        let result = PostEntity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = result.last_insert_id, "Created post");
        Ok(new_post.into_post(result.last_insert_id))
    }

    async fn update(&self, id: i64, changes: &PostChanges) -> Result<bool, RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(changes.title.clone()))
            .col_expr(post::Column::Content, Expr::value(changes.content.clone()))
            .col_expr(
                post::Column::UpdatedAt,
                Expr::value(changes.updated_at.clone()),
            )
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = id, rows = result.rows_affected, "Updated post");
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = id, rows = result.rows_affected, "Deleted post");
        Ok(result.rows_affected > 0)
    }
}
