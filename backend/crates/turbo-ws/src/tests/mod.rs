mod turbo_stream;

use crate::{BroadcastConfig, StreamBroadcaster};

pub(crate) fn broadcaster() -> StreamBroadcaster {
    StreamBroadcaster::new(BroadcastConfig::default())
}
