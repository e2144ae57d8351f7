use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::response::{Payload, Reply};
use crate::db::StoreError;

/// Request failures, each with a fixed HTTP status and application code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("不支持的方法")]
    MethodNotAllowed,
    #[error("无法获取评论")]
    ListFailed(#[source] StoreError),
    #[error("无效的请求体: {0}")]
    InvalidBody(String),
    #[error("无法添加评论")]
    InsertFailed(#[source] StoreError),
    #[error("无效的评论ID")]
    InvalidId,
    #[error("无法删除评论")]
    DeleteFailed(#[source] StoreError),
    #[error("未找到评论")]
    NotFound,
    #[error("添加评论失败或未影响任何行")]
    InsertNoop,
    #[error("未找到路由")]
    RouteNotFound,
}

impl AppError {
    /// Application code carried in the envelope.
    pub fn code(&self) -> i32 {
        match self {
            AppError::MethodNotAllowed => 1000,
            AppError::ListFailed(_) => 1001,
            AppError::InvalidBody(_) => 1002,
            AppError::InsertFailed(_) => 1003,
            AppError::InvalidId => 1004,
            AppError::DeleteFailed(_) => 1005,
            AppError::NotFound => 1006,
            AppError::InsertNoop => 1007,
            AppError::RouteNotFound => 1008,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidBody(_) | AppError::InvalidId => StatusCode::BAD_REQUEST,
            AppError::NotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::ListFailed(_)
            | AppError::InsertFailed(_)
            | AppError::DeleteFailed(_)
            | AppError::InsertNoop => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::ListFailed(e) | AppError::InsertFailed(e) | AppError::DeleteFailed(e) => {
                tracing::error!(code = self.code(), "{}: {}", self, e);
            }
            AppError::InsertNoop => {
                tracing::error!(code = self.code(), "Insert reported success but affected no rows");
            }
            _ => {}
        }

        Reply::new(self.status(), self.code(), self.to_string(), Payload::Null).into_response()
    }
}
