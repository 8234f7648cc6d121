#![allow(dead_code)]

use turbo_core::{Comment, Post};

/// Creates an unsaved Post
pub fn create_test_post() -> Post {
    Post::new("Test Post".to_string(), "Test post body".to_string())
}

/// Creates an unsaved Comment on `post_id`
pub fn create_test_comment(post_id: i64) -> Comment {
    Comment::new(post_id, "ada".to_string(), "Test comment body".to_string())
}
