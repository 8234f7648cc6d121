pub mod comments;
pub mod delete_response;
pub mod error;
pub mod posts;
pub mod validation;
