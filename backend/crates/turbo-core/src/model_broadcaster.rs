use crate::{
    BroadcastSender, Broadcastable, BroadcastableModel, LifecycleEvent,
    Result as CoreErrorResult, StreamAction, Target,
};

use std::sync::Arc;

use log::{debug, warn};

/// Fans lifecycle events out to a model's own channel and its relations
#[derive(Clone)]
pub struct ModelBroadcaster {
    sender: Arc<dyn BroadcastSender>,
}

impl ModelBroadcaster {
    pub fn new(sender: Arc<dyn BroadcastSender>) -> Self {
        Self { sender }
    }

    /// Build the broadcast for `target` and hand it to the sender
    pub async fn send_broadcast<B>(
        &self,
        source: &B,
        target: &Target,
        action: StreamAction,
    ) -> CoreErrorResult<usize>
    where
        B: Broadcastable + Sync + ?Sized,
    {
        let broadcast = source.stream_broadcast(target, action)?;

        debug!(
            "Sending {} broadcast to '{}' using {}",
            broadcast.action, broadcast.dom_target, broadcast.template
        );

        self.sender.send_broadcast(broadcast).await
    }

    /// Broadcast `event` for `model`: self first (when enabled), then every
    /// relation in declaration order. Targets are not deduplicated.
    ///
    /// A failed send is logged and does not stop the remaining targets.
    /// Returns how many broadcasts were handed off.
    pub async fn broadcast<M>(&self, model: &M, event: LifecycleEvent) -> usize
    where
        M: BroadcastableModel,
    {
        let action = model.action(event);

        let mut targets = Vec::new();
        if M::BROADCAST_SELF {
            targets.push(model.as_target());
        }
        targets.extend(M::broadcasts_to().iter().map(|relation| relation.resolve(model)));

        let mut sent = 0;
        for target in &targets {
            match self.send_broadcast(model, target, action).await {
                Ok(_) => sent += 1,
                Err(e) => warn!(
                    "Failed to broadcast {} of {} to {}: {}",
                    event,
                    M::META,
                    target,
                    e
                ),
            }
        }

        debug!(
            "Broadcast {} of {} to {}/{} targets",
            event,
            M::META,
            sent,
            targets.len()
        );

        sent
    }
}
