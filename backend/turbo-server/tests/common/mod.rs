#![allow(dead_code)]

//! Test infrastructure for turbo-server API tests

use turbo_core::{ModelBroadcaster, Post};
use turbo_db::{ModelRepository, PostRepository};
use turbo_server::{AppState, templates};
use turbo_ws::{
    BroadcastConfig, ChannelSender, Metrics, ShutdownCoordinator, StreamBroadcaster,
    StreamMessage, StreamState,
};

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::sync::broadcast;

/// In-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    turbo_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState wired to real stream channels and the built-in templates
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    let broadcaster = StreamBroadcaster::new(BroadcastConfig::default());
    let metrics = Metrics::new();
    let sender = ChannelSender::new(
        broadcaster.clone(),
        Arc::new(templates::builtin()),
        metrics.clone(),
    );

    AppState::new(
        pool,
        ModelBroadcaster::new(Arc::new(sender)),
        StreamState::new(broadcaster, metrics, ShutdownCoordinator::new()),
    )
}

/// Subscribe to a stream directly on the broadcaster
pub async fn subscribe(state: &AppState, stream: &str) -> broadcast::Receiver<StreamMessage> {
    state.streams.broadcaster.subscribe(stream).await
}

/// Drain everything already published to `rx`
pub fn drain(rx: &mut broadcast::Receiver<StreamMessage>) -> Vec<StreamMessage> {
    let mut messages = Vec::new();
    while let Ok(message) = rx.try_recv() {
        messages.push(message);
    }
    messages
}

pub async fn create_test_post(pool: &SqlitePool, title: &str) -> Post {
    let mut post = Post::new(title.to_string(), "Body".to_string());
    PostRepository::new(pool.clone())
        .insert(&mut post)
        .await
        .expect("Failed to create test post");
    post
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
