//! Error body returned by every failing request.

use serde::{Deserialize, Serialize};

/// `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new("Post not found")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_body() {
        let json = serde_json::to_string(&ErrorResponse::not_found()).unwrap();
        assert_eq!(json, r#"{"error":"Post not found"}"#);
    }
}
