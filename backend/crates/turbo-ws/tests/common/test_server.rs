#![allow(dead_code)]

use turbo_ws::{
    BroadcastConfig, ChannelSender, Metrics, ShutdownCoordinator, StreamBroadcaster, StreamState,
    TemplateRegistry,
};

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;
use tokio::time::{Duration, Instant, sleep};

pub const COMMENT_TEMPLATE: &str =
    "<li id=\"comment_{{ comment.id }}\">{{ comment.author }}: {{ comment.body }}</li>";

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections: usize,
    pub send_buffer_size: usize,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections: 100,
            send_buffer_size: 16,
        }
    }
}

impl TestServerConfig {
    pub fn with_strict_limits() -> Self {
        Self {
            max_connections: 2,
            ..Default::default()
        }
    }
}

/// Test server with access to its stream state
pub struct TestServerWithState {
    pub server: TestServer,
    pub state: StreamState,
    pub sender: ChannelSender,
}

impl TestServerWithState {
    /// Wait until `stream` has `expected` subscribers; closed sockets unsubscribe asynchronously
    pub async fn wait_for_subscribers(&self, stream: &str, expected: usize) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while self.state.broadcaster.subscriber_count(stream).await != expected {
            assert!(
                Instant::now() < deadline,
                "timed out waiting for {expected} subscribers on {stream}"
            );
            sleep(Duration::from_millis(5)).await;
        }
    }
}

pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let broadcaster = StreamBroadcaster::new(BroadcastConfig {
        max_connections: config.max_connections,
        send_buffer_size: config.send_buffer_size,
        ..BroadcastConfig::default()
    });
    let metrics = Metrics::default();

    let templates = TemplateRegistry::new().with_template("blog/comment.html", COMMENT_TEMPLATE);
    let sender = ChannelSender::new(broadcaster.clone(), Arc::new(templates), metrics.clone());

    let state = StreamState::new(broadcaster, metrics, ShutdownCoordinator::new());

    let router = Router::new()
        .route("/ws/streams/{stream}", get(turbo_ws::handler))
        .with_state(state.clone());

    let server = TestServer::builder()
        .http_transport()
        .build(router)
        .expect("Failed to create test server");

    TestServerWithState {
        server,
        state,
        sender,
    }
}
