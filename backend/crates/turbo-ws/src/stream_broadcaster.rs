use crate::{BroadcastConfig, Result as WsErrorResult, StreamMessage, WsError};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use tokio::sync::{RwLock, broadcast};

/// Manages one broadcast channel per stream name (DOM target)
#[derive(Clone)]
pub struct StreamBroadcaster {
    inner: Arc<RwLock<BroadcasterInner>>,
    config: BroadcastConfig,
}

struct BroadcasterInner {
    channels: HashMap<String, StreamChannel>,
    total_subscribers: usize,
}

pub(crate) struct StreamChannel {
    sender: broadcast::Sender<StreamMessage>,
    subscriber_count: usize,
}

impl StreamBroadcaster {
    pub fn new(config: BroadcastConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(BroadcasterInner {
                channels: HashMap::new(),
                total_subscribers: 0,
            })),
            config,
        }
    }

    pub fn config(&self) -> &BroadcastConfig {
        &self.config
    }

    /// Subscribe to a stream, creating its channel on first use
    pub async fn subscribe(&self, stream: &str) -> broadcast::Receiver<StreamMessage> {
        let mut inner = self.inner.write().await;
        self.join(&mut inner, stream)
    }

    /// Like [`subscribe`](Self::subscribe), but refuses once `max_connections`
    /// subscribers exist. The check and the increment share one write lock.
    pub async fn try_subscribe(
        &self,
        stream: &str,
    ) -> WsErrorResult<broadcast::Receiver<StreamMessage>> {
        let mut inner = self.inner.write().await;

        let max = self.config.max_connections;
        if inner.total_subscribers >= max {
            return Err(WsError::ConnectionLimitExceeded {
                current: inner.total_subscribers,
                max,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(self.join(&mut inner, stream))
    }

    fn join(
        &self,
        inner: &mut BroadcasterInner,
        stream: &str,
    ) -> broadcast::Receiver<StreamMessage> {
        let channel = inner.channels.entry(stream.to_string()).or_insert_with(|| {
            let (sender, _) = broadcast::channel(self.config.channel_capacity);
            log::info!("Created broadcast channel for stream {}", stream);
            StreamChannel {
                sender,
                subscriber_count: 0,
            }
        });

        channel.subscriber_count += 1;
        let receiver = channel.sender.subscribe();
        let count = channel.subscriber_count;
        inner.total_subscribers += 1;

        log::debug!(
            "Client subscribed to stream {} ({} total subscribers)",
            stream,
            count
        );

        receiver
    }

    pub async fn unsubscribe(&self, stream: &str) {
        let mut inner = self.inner.write().await;

        let Some(channel) = inner.channels.get_mut(stream) else {
            return;
        };
        channel.subscriber_count = channel.subscriber_count.saturating_sub(1);
        let remaining = channel.subscriber_count;
        inner.total_subscribers = inner.total_subscribers.saturating_sub(1);

        log::debug!(
            "Client unsubscribed from stream {} ({} remaining subscribers)",
            stream,
            remaining
        );

        if remaining == 0 {
            inner.channels.remove(stream);
            log::info!("Removed empty broadcast channel for stream {}", stream);
        }
    }

    /// Publish to every subscriber of `stream`; returns how many received it
    pub async fn broadcast(&self, stream: &str, message: StreamMessage) -> WsErrorResult<usize> {
        let inner = self.inner.read().await;

        let Some(channel) = inner.channels.get(stream) else {
            log::debug!("No broadcast channel exists for stream {}", stream);
            return Ok(0);
        };

        match channel.sender.send(message) {
            Ok(receiver_count) => {
                log::debug!(
                    "Broadcast message to stream {} ({} receivers)",
                    stream,
                    receiver_count
                );
                Ok(receiver_count)
            }
            Err(_) => {
                // Channel exists but every receiver has gone away
                log::debug!("Broadcast to stream {} had no active receivers", stream);
                Ok(0)
            }
        }
    }

    pub async fn subscriber_count(&self, stream: &str) -> usize {
        let inner = self.inner.read().await;
        inner
            .channels
            .get(stream)
            .map(|c| c.subscriber_count)
            .unwrap_or(0)
    }

    /// Subscribers across all streams
    pub async fn total_subscribers(&self) -> usize {
        self.inner.read().await.total_subscribers
    }

    pub async fn active_streams(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        inner.channels.keys().cloned().collect()
    }

    pub async fn channel_count(&self) -> usize {
        self.inner.read().await.channels.len()
    }
}
