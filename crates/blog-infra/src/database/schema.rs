//! Startup schema setup.

use sea_orm::{ConnectionTrait, DbConn, DbErr};

/// Idempotent; an existing `posts` table is left as it is.
pub const CREATE_POSTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT DEFAULT CURRENT_TIMESTAMP,
    updated_at TEXT DEFAULT CURRENT_TIMESTAMP
)";

/// Make sure the `posts` table exists.
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    db.execute_unprepared(CREATE_POSTS_TABLE).await?;
    tracing::debug!("posts table ready");
    Ok(())
}
