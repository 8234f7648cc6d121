//! End-to-end: REST mutation in, turbo-stream fragment out over the websocket

mod common;

use crate::common::{create_test_app_state, create_test_post};

use turbo_server::build_router;

use axum_test::TestServer;
use serde_json::json;
use tokio::time::{Duration, Instant, sleep, timeout};

#[tokio::test]
async fn given_posts_subscriber_when_comment_posted_then_fragment_arrives_over_websocket() {
    // Given
    let state = create_test_app_state().await;
    let post = create_test_post(&state.pool, "Hello").await;
    let server = TestServer::builder()
        .http_transport()
        .build(build_router(state.clone()))
        .expect("Failed to create test server");

    let mut ws = server
        .get_websocket("/ws/streams/posts")
        .await
        .into_websocket()
        .await;

    let deadline = Instant::now() + Duration::from_secs(2);
    while state.streams.broadcaster.subscriber_count("posts").await == 0 {
        assert!(Instant::now() < deadline, "subscriber never registered");
        sleep(Duration::from_millis(5)).await;
    }

    // When
    server
        .post(&format!("/api/v1/posts/{}/comments", post.id.unwrap()))
        .json(&json!({"author": "ada", "body": "Live!"}))
        .await
        .assert_status_ok();

    // Then
    let frame = timeout(Duration::from_secs(2), ws.receive_text())
        .await
        .expect("Timed out waiting for fragment");
    assert!(frame.starts_with("<turbo-stream action=\"append\" target=\"posts\"><template>"));
    assert!(frame.contains("<span class=\"comment-author\">ada</span>"));
    assert!(frame.contains("Live!"));
}
