use axum_test::{TestServer, TestWebSocket};
use tokio::time::{Duration, timeout};

/// Subscriber socket for one stream
pub struct StreamTestClient {
    ws: TestWebSocket,
    pub stream: String,
}

impl StreamTestClient {
    pub async fn connect(server: &TestServer, stream: &str) -> Self {
        let ws = server
            .get_websocket(&format!("/ws/streams/{stream}"))
            .await
            .into_websocket()
            .await;

        Self {
            ws,
            stream: stream.to_string(),
        }
    }

    /// Receive the next text frame, failing the test after a short wait
    pub async fn receive_text(&mut self) -> String {
        timeout(Duration::from_secs(2), self.ws.receive_text())
            .await
            .expect("Timed out waiting for a stream message")
    }

    pub async fn close(self) {
        self.ws.close().await;
    }
}
