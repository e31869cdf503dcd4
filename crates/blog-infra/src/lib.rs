//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `sqlite` - SQLite storage via SeaORM

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "sqlite")]
pub use database::SqlitePostRepository;
