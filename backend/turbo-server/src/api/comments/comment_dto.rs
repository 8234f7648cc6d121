use turbo_core::Comment;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommentDto {
    pub id: Option<i64>,
    pub post_id: i64,
    pub author: String,
    pub body: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Comment> for CommentDto {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            post_id: c.post_id,
            author: c.author,
            body: c.body,
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            comment: comment.into(),
        }
    }
}

/// Comments of one post, oldest first
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub post_id: i64,
    pub comments: Vec<CommentDto>,
}
