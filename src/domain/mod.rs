//! Domain types for the comment board.
//!
//! This module provides:
//! - The `Comment` record and the `NewComment` create payload
//! - Page/size resolution and in-memory pagination

pub mod comment;
pub mod pagination;

pub use comment::{Comment, NewComment};
pub use pagination::{PageRequest, PageSize, DEFAULT_PAGE_SIZE};
