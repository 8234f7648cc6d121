use crate::{BroadcastContext, StreamAction};

use serde::Serialize;

/// Everything the outbound sender needs to render and deliver one update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamBroadcast {
    /// DOM id the fragment applies to, also the name of the delivery channel
    pub dom_target: String,
    pub action: StreamAction,
    /// Template id to render
    pub template: String,
    pub context: BroadcastContext,
}
