use crate::{
    Metrics, Result as WsErrorResult, StreamBroadcaster, StreamMessage, TemplateRenderer,
    render_stream,
};

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use turbo_core::{BroadcastSender, CoreError, Result as CoreErrorResult, StreamBroadcast};

/// Renders broadcasts and publishes them on the per-stream channels
#[derive(Clone)]
pub struct ChannelSender {
    broadcaster: StreamBroadcaster,
    renderer: Arc<dyn TemplateRenderer>,
    metrics: Metrics,
}

impl ChannelSender {
    pub fn new(
        broadcaster: StreamBroadcaster,
        renderer: Arc<dyn TemplateRenderer>,
        metrics: Metrics,
    ) -> Self {
        Self {
            broadcaster,
            renderer,
            metrics,
        }
    }

    pub fn broadcaster(&self) -> &StreamBroadcaster {
        &self.broadcaster
    }

    /// Render a broadcast into its `<turbo-stream>` element
    pub fn render(&self, broadcast: &StreamBroadcast) -> WsErrorResult<String> {
        let started = Instant::now();

        let body = if broadcast.action.carries_template() {
            Some(self.renderer.render(&broadcast.template, &broadcast.context)?)
        } else {
            None
        };

        self.metrics.render_latency(started.elapsed());
        Ok(render_stream(
            broadcast.action,
            &broadcast.dom_target,
            body.as_deref(),
        ))
    }
}

#[async_trait]
impl BroadcastSender for ChannelSender {
    async fn send_broadcast(&self, broadcast: StreamBroadcast) -> CoreErrorResult<usize> {
        let payload = self.render(&broadcast).map_err(|e| {
            self.metrics.error_occurred(e.kind());
            CoreError::broadcast(e.to_string())
        })?;

        let action = broadcast.action;
        let message = StreamMessage::new(broadcast.dom_target.clone(), action, payload);

        let receivers = self
            .broadcaster
            .broadcast(&broadcast.dom_target, message)
            .await
            .map_err(|e| {
                self.metrics.error_occurred(e.kind());
                CoreError::broadcast(e.to_string())
            })?;

        self.metrics.broadcast_published(action.as_str(), receivers);
        Ok(receivers)
    }
}
