pub mod comment_dto;
pub mod comments;
pub mod create_comment_request;
pub mod update_comment_request;

pub use comments::{create_comment, delete_comment, list_comments, update_comment};
