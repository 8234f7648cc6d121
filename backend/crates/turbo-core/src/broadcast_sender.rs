use crate::{Result as CoreErrorResult, StreamBroadcast};

use async_trait::async_trait;

/// Outbound boundary: renders a broadcast and delivers it to every
/// subscriber of its DOM target's channel.
///
/// Delivery is best effort. Returns the number of receivers reached.
#[async_trait]
pub trait BroadcastSender: Send + Sync {
    async fn send_broadcast(&self, broadcast: StreamBroadcast) -> CoreErrorResult<usize>;
}
