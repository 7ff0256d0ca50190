//! Handlers for the `/posts` resource.
//!
//! Each handler issues exactly one store call, awaits its single
//! completion, and maps the outcome to a response. Payloads are passed
//! through to the store unvalidated; the store assigns ids and creation
//! dates. Error-to-status mapping lives in [`AppError`](crate::error::AppError).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scribe_db::models::{NewPost, Post, UpdatePost};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/posts
///
/// Create a post from the raw request body and return it. Responds with
/// the default 200 status on success. Create has no not-found branch:
/// every store failure answers 500.
pub async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<NewPost>,
) -> AppResult<Json<Post>> {
    let post = state
        .store
        .create_post(input)
        .await
        .map_err(AppError::CreateFailed)?;

    Ok(Json(post))
}

/// PUT /api/v1/posts/{id}
///
/// Update a post in place and return the updated row. Responds 404 if
/// the store reports the post does not exist.
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(input): Json<UpdatePost>,
) -> AppResult<Json<Post>> {
    let post = state.store.update_post(&post_id, input).await?;

    Ok(Json(post))
}

/// GET /api/v1/posts/{id}
///
/// Fetch a post by id, with the same 404-vs-500 mapping as update.
pub async fn find_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> AppResult<Json<Post>> {
    let post = state.store.find_post(&post_id).await?;

    Ok(Json(post))
}

/// GET /api/v1/posts
///
/// Listing semantics (pagination, filtering) are not yet specified, so
/// the route answers 501 rather than inventing them or hanging the
/// client. The store contract has no list operation either.
pub async fn list_posts(State(_state): State<AppState>) -> AppResult<StatusCode> {
    Err(AppError::NotImplemented("post listing"))
}
