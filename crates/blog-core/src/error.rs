//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("{0}")]
    Validation(String),
}

/// Repository-level errors.
///
/// Query and constraint failures wrap the storage engine's own text; connection
/// failures wrap the driver's description of why the database could not be
/// reached. Either way the message is surfaced to clients as-is.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepoError {
    /// The underlying storage message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            RepoError::Connection(msg) | RepoError::Query(msg) | RepoError::Constraint(msg) => {
                msg.as_str()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_reads_like_the_entity() {
        let err = DomainError::NotFound {
            entity_type: "Post",
            id: 7,
        };
        assert_eq!(err.to_string(), "Post not found");
    }

    #[test]
    fn repo_message_strips_category() {
        let err = RepoError::Constraint("NOT NULL constraint failed: posts.title".into());
        assert_eq!(err.message(), "NOT NULL constraint failed: posts.title");
        assert!(err.to_string().starts_with("Constraint violation"));
    }
}
