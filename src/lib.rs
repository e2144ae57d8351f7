pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;

pub use config::Config;
pub use db::{init_db, CommentStore, MockCommentStore, Repository, StoreError};
pub use domain::{Comment, NewComment, PageRequest, PageSize};
pub use error::AppError;
