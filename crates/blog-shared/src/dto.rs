//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

/// Reads a text field that clients may also send as a number or boolean.
/// Scalars are kept in their JSON spelling (`7` becomes `"7"`, `true` becomes
/// `"1"`); `null` reads as absent.
fn text_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(if b { "1" } else { "0" }.to_owned())),
        Some(other) => Err(de::Error::invalid_type(
            unexpected(&other),
            &"a string, number or boolean",
        )),
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'static> {
    match value {
        Value::Array(_) => de::Unexpected::Seq,
        _ => de::Unexpected::Map,
    }
}

/// Body of `POST /posts`.
///
/// Both fields are optional on the wire so that a missing field reaches
/// validation instead of failing JSON parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default, deserialize_with = "text_scalar")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_scalar")]
    pub content: Option<String>,
}

/// Body of `PUT /posts/{id}`. Values are stored exactly as received.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, deserialize_with = "text_scalar")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_scalar")]
    pub content: Option<String>,
}

/// A stored post. Timestamps are returned as stored: ISO-8601 for rows written
/// by this service, `null` or other text for rows written elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Result of `PUT /posts/{id}`, echoing the values that were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedPostResponse {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub updated_at: String,
}
