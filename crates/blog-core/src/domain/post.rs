use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::error::DomainError;

/// Post entity - a stored blog article.
///
/// Timestamps are the stored text, passed through as-is. Rows written by
/// this service always carry ISO-8601 values; rows from elsewhere may hold
/// NULL or another layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A validated post that has not been stored yet.
///
/// `created_at` doubles as the initial `updated_at`.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl NewPost {
    pub const REQUIRED_FIELDS_MESSAGE: &'static str = "Title and content required";

    /// Validate the creation input. Both fields must be present and non-empty.
    pub fn new(title: Option<String>, content: Option<String>) -> Result<Self, DomainError> {
        match (title, content) {
            (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => Ok(Self {
                title,
                content,
                created_at: timestamp::now(),
            }),
            _ => Err(DomainError::Validation(
                Self::REQUIRED_FIELDS_MESSAGE.to_string(),
            )),
        }
    }

    /// Attach the id assigned by the store.
    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            updated_at: Some(self.created_at.clone()),
            created_at: Some(self.created_at),
        }
    }
}

/// Replacement values for an existing post.
///
/// Fields are passed through unvalidated; `None` is written as NULL and left
/// for the storage engine to reject.
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub updated_at: String,
}

impl PostChanges {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self {
            title,
            content,
            updated_at: timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_requires_both_fields() {
        assert!(NewPost::new(None, Some("c".into())).is_err());
        assert!(NewPost::new(Some("t".into()), None).is_err());
        assert!(NewPost::new(Some(String::new()), Some("c".into())).is_err());

        let err = NewPost::new(Some("t".into()), Some(String::new())).unwrap_err();
        assert_eq!(err.to_string(), "Title and content required");
    }

    #[test]
    fn new_post_keeps_whitespace_titles() {
        let post = NewPost::new(Some(" ".into()), Some("c".into())).unwrap();
        assert_eq!(post.title, " ");
    }

    #[test]
    fn stored_post_starts_with_equal_timestamps() {
        let post = NewPost::new(Some("T".into()), Some("C".into()))
            .unwrap()
            .into_post(42);
        assert_eq!(post.id, 42);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn changes_keep_missing_fields_as_none() {
        let changes = PostChanges::new(None, Some(String::new()));
        assert!(changes.title.is_none());
        assert_eq!(changes.content.as_deref(), Some(""));
    }
}
