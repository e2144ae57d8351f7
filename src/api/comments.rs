use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::info;

use super::response::{Payload, Reply};
use super::AppState;
use crate::domain::{NewComment, PageRequest};
use crate::error::AppError;

/// Raw query pairs in request order.
///
/// Each parameter resolves to its first occurrence, so repeated keys never
/// invalidate the rest of the query string.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn query_params(query: Option<Query<QueryParams>>) -> QueryParams {
    query.map(|Query(params)| params).unwrap_or_default()
}

/// Decode the first JSON value in `body`, ignoring anything after it.
///
/// A literal `null` yields an empty comment; an empty body is an error.
fn decode_new_comment(body: &[u8]) -> Result<NewComment, AppError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<NewComment>>();
    match values.next() {
        Some(Ok(new)) => Ok(new.unwrap_or_default()),
        Some(Err(e)) => Err(AppError::InvalidBody(e.to_string())),
        None => Err(AppError::InvalidBody("EOF".to_string())),
    }
}

/// `GET /comment/get?page=&size=`
pub async fn list_comments(
    State(state): State<AppState>,
    query: Option<Query<QueryParams>>,
) -> Result<Reply, AppError> {
    let params = query_params(query);
    let request = PageRequest::parse(
        params.first("page"),
        params.first("size"),
        state.config.default_page_size,
    );

    let all = state
        .store
        .list_comments()
        .await
        .map_err(AppError::ListFailed)?;
    let comments = request.apply(all);

    info!(
        "GET /comment/get: returned {} comments (page={}, size={})",
        comments.len(),
        request.page,
        request.size
    );
    Ok(Reply::ok("成功", Payload::Comments(comments)))
}

/// `POST /comment/add` with a `{userName, content}` body.
pub async fn create_comment(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Reply, AppError> {
    let body = body.map_err(|e| AppError::InvalidBody(e.body_text()))?;
    let new = decode_new_comment(&body)?;

    let comment = state
        .store
        .insert_comment(&new)
        .await
        .map_err(AppError::InsertFailed)?
        .ok_or(AppError::InsertNoop)?;

    info!(
        "POST /comment/add: added comment {} by {}",
        comment.id, comment.user_name
    );
    Ok(Reply::created("成功添加", Payload::Comment(comment)))
}

/// `DELETE /comment/delete?id=`
pub async fn delete_comment(
    State(state): State<AppState>,
    query: Option<Query<QueryParams>>,
) -> Result<Reply, AppError> {
    let id = query_params(query)
        .first("id")
        .and_then(|raw| raw.parse::<u64>().ok())
        .ok_or(AppError::InvalidId)?;

    let deleted = state
        .store
        .delete_comment(id)
        .await
        .map_err(AppError::DeleteFailed)?;
    if !deleted {
        return Err(AppError::NotFound);
    }

    info!("DELETE /comment/delete: deleted comment {}", id);
    Ok(Reply::ok("成功删除", Payload::Null))
}

/// Fallback for a known path hit with the wrong method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Fallback for paths no route matches.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
