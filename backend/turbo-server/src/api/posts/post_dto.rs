use turbo_core::Post;

use serde::Serialize;

/// Post as exposed over the REST API; timestamps are Unix seconds
#[derive(Debug, Serialize)]
pub struct PostDto {
    pub id: Option<i64>,
    pub title: String,
    pub body: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Post> for PostDto {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            body: p.body,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}

/// `{"post": {...}}`
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub post: PostDto,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self { post: post.into() }
    }
}

/// `{"posts": [...]}`, newest first
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostDto>,
}

impl FromIterator<Post> for PostListResponse {
    fn from_iter<I: IntoIterator<Item = Post>>(iter: I) -> Self {
        Self {
            posts: iter.into_iter().map(PostDto::from).collect(),
        }
    }
}
