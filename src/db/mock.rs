//! In-memory comment store for testing without a database file.

use super::{CommentStore, StoreError};
use crate::domain::{Comment, NewComment};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    comments: Vec<Comment>,
    next_id: u64,
}

/// Mock store that keeps comments in memory and can be told to fail.
#[derive(Debug, Default)]
pub struct MockCommentStore {
    inner: Mutex<Inner>,
    fail_list: bool,
    fail_insert: bool,
    fail_delete: bool,
    insert_noop: bool,
}

impl MockCommentStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `list_comments` return an error.
    pub fn with_failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make `insert_comment` return an error.
    pub fn with_failing_insert(mut self) -> Self {
        self.fail_insert = true;
        self
    }

    /// Make `delete_comment` return an error.
    pub fn with_failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    /// Make `insert_comment` succeed without storing anything.
    pub fn with_noop_insert(mut self) -> Self {
        self.insert_noop = true;
        self
    }
}

#[async_trait]
impl CommentStore for MockCommentStore {
    async fn list_comments(&self) -> Result<Vec<Comment>, StoreError> {
        if self.fail_list {
            return Err(StoreError::Unavailable("list disabled".into()));
        }
        // Kept sorted by construction: ids only grow.
        Ok(self.inner.lock().await.comments.clone())
    }

    async fn insert_comment(&self, new: &NewComment) -> Result<Option<Comment>, StoreError> {
        if self.fail_insert {
            return Err(StoreError::Unavailable("insert disabled".into()));
        }
        if self.insert_noop {
            return Ok(None);
        }

        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let comment = Comment {
            id: inner.next_id,
            user_name: new.user_name.clone(),
            content: new.content.clone(),
            created_at: Utc::now(),
        };
        inner.comments.push(comment.clone());
        Ok(Some(comment))
    }

    async fn delete_comment(&self, id: u64) -> Result<bool, StoreError> {
        if self.fail_delete {
            return Err(StoreError::Unavailable("delete disabled".into()));
        }

        let mut inner = self.inner.lock().await;
        let before = inner.comments.len();
        inner.comments.retain(|c| c.id != id);
        Ok(inner.comments.len() < before)
    }
}
