//! SQLite-backed comment repository.

use crate::db::store::{CommentStore, StoreError};
use crate::domain::{Comment, NewComment};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

/// Repository for database operations.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Close the underlying pool, waiting for checked-out connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl CommentStore for Repository {
    async fn list_comments(&self) -> Result<Vec<Comment>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_name, content, created_at
            FROM comments
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(comment_from_row).collect()
    }

    async fn insert_comment(&self, new: &NewComment) -> Result<Option<Comment>, StoreError> {
        let created_at = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO comments (user_name, content, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(new.user_name.as_str())
        .bind(new.content.as_str())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let id = u64::try_from(result.last_insert_rowid()).map_err(|_| {
            StoreError::InvalidRow(format!("negative rowid {}", result.last_insert_rowid()))
        })?;

        Ok(Some(Comment {
            id,
            user_name: new.user_name.clone(),
            content: new.content.clone(),
            created_at,
        }))
    }

    async fn delete_comment(&self, id: u64) -> Result<bool, StoreError> {
        // SQLite rowids are signed; anything larger cannot exist.
        let Ok(id) = i64::try_from(id) else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn comment_from_row(row: &SqliteRow) -> Result<Comment, StoreError> {
    let id: i64 = row.try_get("id")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(Comment {
        id: u64::try_from(id).map_err(|_| StoreError::InvalidRow(format!("negative id {}", id)))?,
        user_name: row.try_get("user_name")?,
        content: row.try_get("content")?,
        created_at,
    })
}
