pub mod broadcasting_repository;
pub mod database;
pub mod error;
pub mod model_repository;
pub mod repositories;

pub use broadcasting_repository::BroadcastingRepository;
pub use database::{connect, run_migrations};
pub use error::{DbError, Result};
pub use model_repository::ModelRepository;
pub use repositories::comment_repository::CommentRepository;
pub use repositories::post_repository::PostRepository;
