//! Post REST API handlers

use crate::api::validation::{MAX_POST_BODY_LENGTH, MAX_TITLE_LENGTH, bounded_text, required_text};
use crate::{
    ApiError, ApiResult, AppState, CreatePostRequest, DeleteResponse, PostListResponse,
    PostResponse, UpdatePostRequest,
};

use turbo_core::Post;
use turbo_db::ModelRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;

/// GET /api/v1/posts
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<PostListResponse>> {
    let posts = state.posts().repository().list().await?;

    Ok(Json(posts.into_iter().collect()))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PostResponse>> {
    let post = find_post(&state, id).await?;

    Ok(Json(post.into()))
}

/// POST /api/v1/posts
pub async fn create_post(
    State(state): State<AppState>,
    Json(req): Json<CreatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let title = required_text(&req.title, "title", MAX_TITLE_LENGTH)?;
    let body = bounded_text(&req.body, "body", MAX_POST_BODY_LENGTH)?;

    let mut post = Post::new(title, body);
    state.posts().save(&mut post).await?;

    log::info!("Created post {:?} via REST API", post.id);

    Ok(Json(post.into()))
}

/// PUT /api/v1/posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let mut post = find_post(&state, id).await?;

    if let Some(ref title) = req.title {
        post.title = required_text(title, "title", MAX_TITLE_LENGTH)?;
    }
    if let Some(ref body) = req.body {
        post.body = bounded_text(body, "body", MAX_POST_BODY_LENGTH)?;
    }
    post.updated_at = Utc::now();

    state.posts().save(&mut post).await?;

    log::info!("Updated post {} via REST API", id);

    Ok(Json(post.into()))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let post = find_post(&state, id).await?;

    state.posts().delete(&post).await?;

    log::info!("Deleted post {} via REST API", id);

    Ok(Json(DeleteResponse { deleted_id: id }))
}

pub(crate) async fn find_post(state: &AppState, id: i64) -> ApiResult<Post> {
    state
        .posts()
        .repository()
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Post {} not found", id)))
}
