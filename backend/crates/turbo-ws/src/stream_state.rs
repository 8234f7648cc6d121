use crate::{
    ConnectionId, Metrics, ShutdownCoordinator, StreamBroadcaster, StreamConnection, StreamMessage,
};

use axum::{
    extract::{
        Path, State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::Response,
};
use tokio::sync::broadcast;

/// Shared state for the stream subscription endpoint
#[derive(Clone)]
pub struct StreamState {
    pub broadcaster: StreamBroadcaster,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
}

impl StreamState {
    pub fn new(
        broadcaster: StreamBroadcaster,
        metrics: Metrics,
        shutdown: ShutdownCoordinator,
    ) -> Self {
        Self {
            broadcaster,
            metrics,
            shutdown,
        }
    }
}

/// `GET /ws/streams/{stream}`: subscribe a socket to one DOM target's fragments
pub async fn handler(
    State(state): State<StreamState>,
    Path(stream): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    let stream = stream.trim().to_lowercase();
    if stream.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    if state.shutdown.is_shutdown() {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let receiver = match state.broadcaster.try_subscribe(&stream).await {
        Ok(receiver) => receiver,
        Err(e) => {
            log::warn!("Rejecting subscription to {}: {}", stream, e);
            state.metrics.connection_rejected();
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    };

    let connection_id = ConnectionId::new();
    log::debug!("Upgrading connection {} for stream {}", connection_id, stream);

    // The slot is already held; give it back if the handshake never completes
    let broadcaster = state.broadcaster.clone();
    let failed_stream = stream.clone();
    let ws = ws.on_failed_upgrade(move |e| {
        log::warn!("Upgrade failed for connection {connection_id}: {e}");
        tokio::spawn(async move { broadcaster.unsubscribe(&failed_stream).await });
    });

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, connection_id, stream, receiver, state)))
}

async fn handle_socket(
    socket: WebSocket,
    connection_id: ConnectionId,
    stream: String,
    receiver: broadcast::Receiver<StreamMessage>,
    state: StreamState,
) {
    let shutdown_guard = state.shutdown.subscribe_guard();
    let connection = StreamConnection::new(
        connection_id,
        stream,
        state.metrics.clone(),
        state.broadcaster.clone(),
    );

    if let Err(e) = connection.handle(socket, receiver, shutdown_guard).await {
        log::error!("Connection {connection_id} error: {e}");
    }
}
