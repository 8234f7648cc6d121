pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod templates;

#[cfg(test)]
mod tests;

pub use api::{
    comments::{
        comment_dto::{CommentDto, CommentListResponse, CommentResponse},
        comments::{create_comment, delete_comment, list_comments, update_comment},
        create_comment_request::CreateCommentRequest,
        update_comment_request::UpdateCommentRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    posts::{
        create_post_request::CreatePostRequest,
        post_dto::{PostDto, PostListResponse, PostResponse},
        posts::{create_post, delete_post, get_post, list_posts, update_post},
        update_post_request::UpdatePostRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
