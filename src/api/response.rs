//! Uniform JSON envelope written by every endpoint.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::domain::Comment;

/// Application code for a successful call.
pub const CODE_OK: i32 = 0;

/// Endpoint-specific payload. Serializes to the bare value, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Comments(Vec<Comment>),
    Comment(Comment),
    Null,
}

/// `{code, msg, data}` wrapper shared by all responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub code: i32,
    pub msg: String,
    pub data: Payload,
}

/// An envelope paired with the HTTP status it is sent with.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub envelope: Envelope,
}

impl Reply {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>, data: Payload) -> Self {
        Self {
            status,
            envelope: Envelope {
                code,
                msg: msg.into(),
                data,
            },
        }
    }

    pub fn ok(msg: impl Into<String>, data: Payload) -> Self {
        Self::new(StatusCode::OK, CODE_OK, msg, data)
    }

    pub fn created(msg: impl Into<String>, data: Payload) -> Self {
        Self::new(StatusCode::CREATED, CODE_OK, msg, data)
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let content_type = [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )];

        match serde_json::to_vec(&self.envelope) {
            Ok(body) => (self.status, content_type, body).into_response(),
            Err(e) => {
                // Status is already decided; only the body is lost.
                error!("Failed to encode JSON response: {}", e);
                (self.status, content_type).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn comment(id: u64) -> Comment {
        Comment {
            id,
            user_name: "u".to_string(),
            content: "c".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_null_payload_serializes_as_null() {
        let envelope = Reply::ok("成功删除", Payload::Null).envelope;
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["msg"], "成功删除");
        assert!(json["data"].is_null());
        assert!(json.as_object().unwrap().contains_key("data"));
    }

    #[test]
    fn test_list_and_single_payloads_are_untagged() {
        let list = serde_json::to_value(Payload::Comments(vec![comment(1), comment(2)])).unwrap();
        assert_eq!(list.as_array().unwrap().len(), 2);
        assert_eq!(list[1]["id"], 2);

        let single = serde_json::to_value(Payload::Comment(comment(3))).unwrap();
        assert_eq!(single["id"], 3);

        let empty = serde_json::to_value(Payload::Comments(vec![])).unwrap();
        assert_eq!(empty, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_reply_sets_status_and_content_type() {
        let response = Reply::created("成功添加", Payload::Comment(comment(1))).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["userName"], "u");
    }
}
