//! Storage abstraction for comment persistence.

use crate::domain::{Comment, NewComment};
use async_trait::async_trait;
use thiserror::Error;

/// Persistence collaborator for comments.
///
/// Implementations own id and timestamp assignment and must make each call
/// atomic on its own.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Fetch every comment, ordered by id ascending.
    async fn list_comments(&self) -> Result<Vec<Comment>, StoreError>;

    /// Insert a comment, assigning `id` and `created_at`.
    ///
    /// Returns `None` if the insert affected no rows.
    async fn insert_comment(&self, new: &NewComment) -> Result<Option<Comment>, StoreError>;

    /// Delete the comment with the given id. Returns whether a row was removed.
    async fn delete_comment(&self, id: u64) -> Result<bool, StoreError>;
}

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid row: {0}")]
    InvalidRow(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
