//! Application state - shared across all handlers.

use std::sync::Arc;

use async_trait::async_trait;

use blog_core::RepoError;
use blog_core::domain::{NewPost, Post, PostChanges};
use blog_core::ports::PostRepository;
use blog_infra::DatabaseConfig;

#[cfg(feature = "sqlite")]
use blog_infra::database::{self, DbConn};
#[cfg(feature = "sqlite")]
use blog_infra::SqlitePostRepository;

#[cfg(not(feature = "sqlite"))]
use blog_infra::InMemoryPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    #[cfg(feature = "sqlite")]
    db: Option<DbConn>,
}

/// Post repository used when the database could not be opened at startup.
/// Every operation fails with the error seen at startup.
pub struct UnavailablePostRepository {
    reason: String,
}

impl UnavailablePostRepository {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> RepoError {
        RepoError::Connection(self.reason.clone())
    }
}

#[async_trait]
impl PostRepository for UnavailablePostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        Err(self.error())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Post>, RepoError> {
        Err(self.error())
    }

    async fn create(&self, _post: NewPost) -> Result<Post, RepoError> {
        Err(self.error())
    }

    async fn update(&self, _id: i64, _changes: &PostChanges) -> Result<bool, RepoError> {
        Err(self.error())
    }

    async fn delete(&self, _id: i64) -> Result<bool, RepoError> {
        Err(self.error())
    }
}

impl AppState {
    /// State around an already-built repository, with no database to close.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            #[cfg(feature = "sqlite")]
            db: None,
        }
    }

    /// Build the application state with appropriate implementations.
    #[cfg(feature = "sqlite")]
    pub async fn new(config: &DatabaseConfig) -> Self {
        let state = match database::open(config).await {
            Ok(db) => Self {
                posts: Arc::new(SqlitePostRepository::new(db.clone())),
                db: Some(db),
            },
            Err(e) => {
                tracing::error!(
                    "Failed to open database: {}. Post requests will fail until restart.",
                    e
                );
                Self::with_repository(Arc::new(UnavailablePostRepository::new(e.to_string())))
            }
        };

        tracing::info!("Application state initialized");
        state
    }

    #[cfg(not(feature = "sqlite"))]
    pub async fn new(config: &DatabaseConfig) -> Self {
        tracing::info!(
            url = %config.url,
            "Running without sqlite feature - using in-memory repository"
        );
        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }

    /// Release the database handle once the server has stopped.
    pub async fn shutdown(self) {
        #[cfg(feature = "sqlite")]
        if let Some(db) = self.db {
            if let Err(e) = database::close(db).await {
                tracing::warn!("Failed to close database cleanly: {}", e);
            }
        }
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::Value;

    use super::*;
    use crate::handlers::configure_routes;

    #[actix_web::test]
    async fn test_unopenable_database_still_serves_errors() {
        let state = AppState::new(&DatabaseConfig::new("sqlite:///nonexistent-dir/x.db")).await;
        assert!(state.db.is_none());

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(res).await;
        let message = body["error"].as_str().unwrap();
        assert!(!message.is_empty());

        let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
