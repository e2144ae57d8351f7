pub mod comments;
pub mod cors;
pub mod response;

use crate::config::Config;
use crate::db::CommentStore;
use axum::routing::{delete, get, post};
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CommentStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn CommentStore>, config: Config) -> Self {
        Self { store, config }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/comment/get",
            // axum serves HEAD from a GET handler unless HEAD has its own
            get(comments::list_comments)
                .head(comments::method_not_allowed)
                .fallback(comments::method_not_allowed),
        )
        .route(
            "/comment/add",
            post(comments::create_comment).fallback(comments::method_not_allowed),
        )
        .route(
            "/comment/delete",
            delete(comments::delete_comment).fallback(comments::method_not_allowed),
        )
        .fallback(comments::route_not_found)
        .layer(middleware::from_fn(cors::cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
