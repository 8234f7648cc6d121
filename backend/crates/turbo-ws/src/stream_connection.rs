use crate::{
    ConnectionId, Metrics, Result as WsErrorResult, ShutdownGuard, StreamBroadcaster,
    StreamMessage, WsError,
};

use std::ops::ControlFlow;
use std::panic::Location;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::mpsc::{self, error::TrySendError};

type Step = ControlFlow<WsErrorResult<()>>;

/// A single subscriber socket bound to one stream
pub struct StreamConnection {
    connection_id: ConnectionId,
    stream: String,
    metrics: Metrics,
    broadcaster: StreamBroadcaster,
}

impl StreamConnection {
    pub fn new(
        connection_id: ConnectionId,
        stream: impl Into<String>,
        metrics: Metrics,
        broadcaster: StreamBroadcaster,
    ) -> Self {
        Self {
            connection_id,
            stream: stream.into(),
            metrics,
            broadcaster,
        }
    }

    /// Forward stream fragments to the socket until the client leaves,
    /// the channel closes, or shutdown is signalled.
    ///
    /// `broadcast_rx` must come from a subscription on this connection's
    /// stream; it is released through the broadcaster on return.
    pub async fn handle(
        self,
        socket: WebSocket,
        mut broadcast_rx: broadcast::Receiver<StreamMessage>,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        log::info!(
            "Stream connection {} established for {}",
            self.connection_id,
            self.stream
        );
        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Bounded so a slow client cannot grow memory without limit
        let send_buffer_size = self.broadcaster.config().send_buffer_size;
        let (tx, mut rx) = mpsc::channel::<Message>(send_buffer_size);

        let send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
            let _ = ws_sender.close().await;
        });

        let result = loop {
            let step = tokio::select! {
                frame = ws_receiver.next() => self.on_client_frame(frame, &tx),
                published = broadcast_rx.recv() => self.on_published(published, &tx),
                _ = shutdown_guard.wait() => {
                    log::info!("Closing connection {} for shutdown", self.connection_id);
                    let _ = tx.try_send(Message::Close(None));
                    ControlFlow::Break(Ok(()))
                }
            };
            if let ControlFlow::Break(outcome) = step {
                break outcome;
            }
        };

        self.broadcaster.unsubscribe(&self.stream).await;
        drop(tx);
        let _ = send_task.await;

        let reason = if result.is_ok() { "normal" } else { "error" };
        self.metrics.connection_closed(reason);
        log::info!(
            "Stream connection {} closed for {}",
            self.connection_id,
            self.stream
        );

        result
    }

    /// Subscribers only listen; anything but a ping or close is ignored
    fn on_client_frame(
        &self,
        frame: Option<Result<Message, axum::Error>>,
        tx: &mpsc::Sender<Message>,
    ) -> Step {
        match frame {
            Some(Ok(Message::Close(_))) | None => {
                log::info!("Connection {} closed by client", self.connection_id);
                ControlFlow::Break(Ok(()))
            }
            Some(Ok(Message::Ping(data))) => {
                let _ = tx.try_send(Message::Pong(data));
                ControlFlow::Continue(())
            }
            Some(Ok(Message::Text(text))) => {
                log::debug!(
                    "Ignoring client text on connection {}: {}",
                    self.connection_id,
                    text.as_str()
                );
                ControlFlow::Continue(())
            }
            Some(Ok(_)) => ControlFlow::Continue(()),
            Some(Err(e)) => {
                log::error!("WebSocket error on connection {}: {e}", self.connection_id);
                ControlFlow::Break(Err(WsError::ConnectionClosed {
                    reason: format!("WebSocket error: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                }))
            }
        }
    }

    fn on_published(
        &self,
        published: Result<StreamMessage, RecvError>,
        tx: &mpsc::Sender<Message>,
    ) -> Step {
        match published {
            Ok(msg) => match self.forward(msg, tx) {
                Ok(()) => ControlFlow::Continue(()),
                Err(e @ WsError::SendBufferFull { .. }) => {
                    self.metrics.error_occurred(e.kind());
                    log::warn!(
                        "Connection {} send buffer full, dropping fragment",
                        self.connection_id
                    );
                    ControlFlow::Continue(())
                }
                Err(e) => {
                    self.metrics.error_occurred(e.kind());
                    ControlFlow::Break(Err(e))
                }
            },
            Err(RecvError::Lagged(missed)) => {
                log::warn!(
                    "Connection {} lagged behind {}, missed {missed} fragments",
                    self.connection_id,
                    self.stream
                );
                self.metrics.messages_lagged(missed);
                ControlFlow::Continue(())
            }
            Err(RecvError::Closed) => {
                log::info!("Stream {} closed under connection {}", self.stream, self.connection_id);
                ControlFlow::Break(Ok(()))
            }
        }
    }

    fn forward(&self, msg: StreamMessage, tx: &mpsc::Sender<Message>) -> WsErrorResult<()> {
        let action = msg.action;
        match tx.try_send(Message::Text(msg.payload.into())) {
            Ok(()) => {
                self.metrics.message_sent(action.as_str());
                Ok(())
            }
            Err(TrySendError::Full(_)) => Err(WsError::SendBufferFull {
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(TrySendError::Closed(_)) => Err(WsError::ConnectionClosed {
                reason: "send task ended".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
