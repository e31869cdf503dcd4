//! Error handling - maps failures to `{"error": ...}` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::{DomainError, RepoError};
use blog_shared::ErrorResponse;

/// Application-level error type. The display text is the response message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn post_not_found() -> Self {
        AppError::NotFound(ErrorResponse::not_found().error)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            tracing::error!("Internal error: {}", detail);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

/// Store failures surface the engine's message verbatim. Logged once, when the
/// response is built.
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Internal(err.message().to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Clone, Default)]
    struct ErrorEvents(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorEvents {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let res = err.error_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn domain_not_found_is_404() {
        let err = AppError::from(DomainError::NotFound {
            entity_type: "Post",
            id: 3,
        });
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "Post not found" }));
    }

    #[actix_web::test]
    async fn validation_is_400() {
        let err = AppError::from(DomainError::Validation(
            "Title and content required".into(),
        ));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Title and content required");
    }

    #[actix_web::test]
    async fn repo_error_is_500_with_raw_message() {
        let err = AppError::from(RepoError::Query("disk I/O error".into()));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "disk I/O error");
    }

    #[test]
    fn store_failure_is_logged_once() {
        let events = ErrorEvents::default();
        let subscriber = tracing_subscriber::registry().with(events.clone());

        tracing::subscriber::with_default(subscriber, || {
            let err = AppError::from(RepoError::Query("disk I/O error".into()));
            let _ = err.error_response();
        });

        assert_eq!(events.0.load(Ordering::SeqCst), 1);
    }
}
