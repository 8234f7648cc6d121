//! Comment REST API handlers

use crate::api::posts::posts::find_post;
use crate::api::validation::{MAX_AUTHOR_LENGTH, MAX_COMMENT_BODY_LENGTH, required_text};
use crate::{
    ApiError, ApiResult, AppState, CommentDto, CommentListResponse, CommentResponse,
    CreateCommentRequest, DeleteResponse, UpdateCommentRequest,
};

use turbo_core::Comment;
use turbo_db::ModelRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;

/// GET /api/v1/posts/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> ApiResult<Json<CommentListResponse>> {
    find_post(&state, post_id).await?;

    let comments = state.comments().repository().find_by_post(post_id).await?;

    Ok(Json(CommentListResponse {
        post_id,
        comments: comments.into_iter().map(CommentDto::from).collect(),
    }))
}

/// POST /api/v1/posts/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Json(req): Json<CreateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let author = required_text(&req.author, "author", MAX_AUTHOR_LENGTH)?;
    let body = required_text(&req.body, "body", MAX_COMMENT_BODY_LENGTH)?;

    // Comments fan out to their post, so it must exist
    find_post(&state, post_id).await?;

    let mut comment = Comment::new(post_id, author, body);
    state.comments().save(&mut comment).await?;

    log::info!(
        "Created comment {:?} on post {} via REST API",
        comment.id,
        post_id
    );

    Ok(Json(comment.into()))
}

/// PUT /api/v1/comments/{id}
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let body = required_text(&req.body, "body", MAX_COMMENT_BODY_LENGTH)?;

    let mut comment = find_comment(&state, id).await?;
    comment.body = body;
    comment.updated_at = Utc::now();

    state.comments().save(&mut comment).await?;

    log::info!("Updated comment {} via REST API", id);

    Ok(Json(comment.into()))
}

/// DELETE /api/v1/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let comment = find_comment(&state, id).await?;

    state.comments().delete(&comment).await?;

    log::info!("Deleted comment {} via REST API", id);

    Ok(Json(DeleteResponse { deleted_id: id }))
}

async fn find_comment(state: &AppState, id: i64) -> ApiResult<Comment> {
    state
        .comments()
        .repository()
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Comment {} not found", id)))
}
