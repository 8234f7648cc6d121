mod common;

use common::{StreamTestClient, create_test_server};

use std::sync::Arc;

use turbo_core::{BroadcastSender, Broadcastable, BroadcastableModel, Comment, LifecycleEvent, ModelBroadcaster, StreamAction};

fn saved_comment(id: i64, post_id: i64) -> Comment {
    let mut comment = Comment::new(post_id, "ada".to_string(), "Nice post".to_string());
    comment.id = Some(id);
    comment
}

#[tokio::test]
async fn given_subscriber_when_comment_created_then_receives_both_fan_out_fragments() {
    // Given - one socket on the comment's own target, one on the posts collection
    let test_server = create_test_server();
    let mut own = StreamTestClient::connect(&test_server.server, "comment_7").await;
    let mut posts = StreamTestClient::connect(&test_server.server, "posts").await;
    test_server.wait_for_subscribers("comment_7", 1).await;
    test_server.wait_for_subscribers("posts", 1).await;

    let broadcaster = ModelBroadcaster::new(Arc::new(test_server.sender.clone()));

    // When
    let sent = broadcaster
        .broadcast(&saved_comment(7, 3), LifecycleEvent::Created)
        .await;

    // Then
    assert_eq!(sent, 2);
    assert_eq!(
        own.receive_text().await,
        "<turbo-stream action=\"append\" target=\"comment_7\"><template><li id=\"comment_7\">ada: Nice post</li></template></turbo-stream>"
    );
    assert_eq!(
        posts.receive_text().await,
        "<turbo-stream action=\"append\" target=\"posts\"><template><li id=\"comment_7\">ada: Nice post</li></template></turbo-stream>"
    );
}

#[tokio::test]
async fn given_subscriber_when_comment_deleted_then_receives_remove() {
    // Given
    let test_server = create_test_server();
    let mut client = StreamTestClient::connect(&test_server.server, "comment_9").await;
    test_server.wait_for_subscribers("comment_9", 1).await;
    let comment = saved_comment(9, 3);

    // When
    let broadcast = comment
        .stream_broadcast(&comment.as_target(), StreamAction::Remove)
        .unwrap();
    test_server.sender.send_broadcast(broadcast).await.unwrap();

    // Then
    assert_eq!(
        client.receive_text().await,
        "<turbo-stream action=\"remove\" target=\"comment_9\"></turbo-stream>"
    );
}

#[tokio::test]
async fn given_mixed_case_stream_path_when_subscribed_then_stream_name_lowercased() {
    // Given
    let test_server = create_test_server();

    // When
    let _client = StreamTestClient::connect(&test_server.server, "Posts").await;

    // Then
    test_server.wait_for_subscribers("posts", 1).await;
}

#[tokio::test]
async fn given_client_disconnects_when_closed_then_channel_cleaned_up() {
    // Given
    let test_server = create_test_server();
    let client = StreamTestClient::connect(&test_server.server, "posts").await;
    test_server.wait_for_subscribers("posts", 1).await;

    // When
    client.close().await;

    // Then
    test_server.wait_for_subscribers("posts", 0).await;
    assert_eq!(test_server.state.broadcaster.channel_count().await, 0);
}

#[tokio::test]
async fn given_shutdown_when_triggered_then_connections_released() {
    // Given
    let test_server = create_test_server();
    let _client = StreamTestClient::connect(&test_server.server, "posts").await;
    test_server.wait_for_subscribers("posts", 1).await;

    // When
    test_server.state.shutdown.shutdown();

    // Then
    test_server.wait_for_subscribers("posts", 0).await;
}
