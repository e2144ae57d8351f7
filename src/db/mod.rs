//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and migrations
//! - SQLite pragma configuration
//! - The `CommentStore` trait with SQLite and in-memory implementations

pub mod migrations;
pub mod mock;
pub mod repo;
pub mod store;

pub use migrations::init_db;
pub use mock::MockCommentStore;
pub use repo::Repository;
pub use store::{CommentStore, StoreError};
