//! Comment record and the payload clients submit to create one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Identity assigned by the store on insert.
    pub id: u64,
    pub user_name: String,
    pub content: String,
    /// Insertion time, set by the store.
    pub created_at: DateTime<Utc>,
}

/// Body of a create request.
///
/// Only the client-writable fields exist here, so `id` and `createdAt`
/// keys in the request body are dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewComment {
    pub user_name: String,
    pub content: String,
}

impl NewComment {
    pub fn new(user_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_comment_serializes_camel_case() {
        let comment = Comment {
            id: 7,
            user_name: "alice".to_string(),
            content: "hello".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["userName"], "alice");
        assert_eq!(json["content"], "hello");
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_new_comment_ignores_server_fields() {
        let body = r#"{"id": 99, "userName": "a", "content": "b", "createdAt": "1999-01-01T00:00:00Z"}"#;
        let payload: NewComment = serde_json::from_str(body).unwrap();
        assert_eq!(payload, NewComment::new("a", "b"));
    }

    #[test]
    fn test_new_comment_missing_fields_default_to_empty() {
        let payload: NewComment = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.user_name, "");
        assert_eq!(payload.content, "");
    }

    #[test]
    fn test_new_comment_rejects_wrong_types() {
        assert!(serde_json::from_str::<NewComment>(r#"{"userName": 1}"#).is_err());
    }
}
