use turbo_core::{Comment, ModelBroadcaster, Post};
use turbo_db::{BroadcastingRepository, CommentRepository, PostRepository};
use turbo_ws::StreamState;

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Shared state for REST handlers and the stream endpoint
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub broadcaster: ModelBroadcaster,
    pub streams: StreamState,
}

impl AppState {
    pub fn new(pool: SqlitePool, broadcaster: ModelBroadcaster, streams: StreamState) -> Self {
        Self {
            pool,
            broadcaster,
            streams,
        }
    }

    pub fn posts(&self) -> BroadcastingRepository<PostRepository, Post> {
        BroadcastingRepository::new(
            PostRepository::new(self.pool.clone()),
            self.broadcaster.clone(),
        )
    }

    pub fn comments(&self) -> BroadcastingRepository<CommentRepository, Comment> {
        BroadcastingRepository::new(
            CommentRepository::new(self.pool.clone()),
            self.broadcaster.clone(),
        )
    }
}

impl FromRef<AppState> for StreamState {
    fn from_ref(state: &AppState) -> Self {
        state.streams.clone()
    }
}
