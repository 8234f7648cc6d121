pub mod create_post_request;
pub mod post_dto;
pub mod posts;
pub mod update_post_request;

pub use posts::{create_post, delete_post, get_post, list_posts, update_post};
