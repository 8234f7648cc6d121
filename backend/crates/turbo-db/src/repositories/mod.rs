pub mod comment_repository;
pub mod post_repository;
