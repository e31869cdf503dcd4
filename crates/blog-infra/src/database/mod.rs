//! Database connection management and the SQLite post repository.

mod connections;

#[cfg(feature = "sqlite")]
pub mod entity;
#[cfg(feature = "sqlite")]
mod schema;
#[cfg(feature = "sqlite")]
mod sqlite_repo;

pub use connections::DatabaseConfig;

#[cfg(feature = "sqlite")]
pub use connections::{close, connect, open};
#[cfg(feature = "sqlite")]
pub use sea_orm::DbConn;
#[cfg(feature = "sqlite")]
pub use schema::{CREATE_POSTS_TABLE, ensure_schema};
#[cfg(feature = "sqlite")]
pub use sqlite_repo::SqlitePostRepository;

#[cfg(feature = "sqlite")]
#[cfg(test)]
mod tests;
