//! Opening the comment database and applying its one-table schema.
//!
//! Every pooled connection gets the same pragmas:
//! - `journal_mode = WAL`: list scans read a snapshot while an insert or
//!   delete holds the write lock.
//! - `busy_timeout`: a writer that finds the file locked waits up to this
//!   many milliseconds before the store reports an error.
//! - `synchronous = NORMAL`: a commit may be lost on power failure but the
//!   file is never corrupted under WAL.

use sqlx::sqlite::{SqliteConnection, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::{info, warn};

/// Open (creating if needed) the comment database and apply the schema.
pub async fn init_db(db_path: &str) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Could not create database directory {}: {}", parent.display(), e);
            }
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .after_connect(|conn, _meta| Box::pin(async move { configure_pragmas_conn(conn).await }))
        .connect(&format!("sqlite:{}?mode=rwc", db_path))
        .await?;

    run_migrations(&pool).await?;

    info!("Database ready at {}", db_path);
    Ok(pool)
}

/// Create the comments table if it does not exist yet.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");
    let schema_sql = include_str!("schema.sql");

    for statement in schema_sql.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
        }
    }

    info!("Migrations completed");
    Ok(())
}

/// Milliseconds a connection waits on a locked database file.
pub const BUSY_TIMEOUT_MS: u32 = 5000;

async fn configure_pragmas_conn(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    use sqlx::Row;

    // journal_mode reports the mode actually in effect, which may not be WAL
    let journal_mode: String = sqlx::query("PRAGMA journal_mode = WAL")
        .fetch_one(&mut *conn)
        .await?
        .get(0);
    if !journal_mode.eq_ignore_ascii_case("wal") {
        warn!("SQLite kept journal_mode={}", journal_mode);
    }

    for pragma in [
        format!("PRAGMA busy_timeout = {}", BUSY_TIMEOUT_MS),
        "PRAGMA synchronous = NORMAL".to_string(),
    ] {
        sqlx::query(&pragma).execute(&mut *conn).await?;
    }

    Ok(())
}
