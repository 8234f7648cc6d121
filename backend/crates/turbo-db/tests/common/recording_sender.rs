#![allow(dead_code)]

use turbo_core::{BroadcastSender, Result as CoreErrorResult, StreamBroadcast};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// Sender that records broadcasts instead of delivering them
#[derive(Clone, Default)]
pub struct RecordingSender {
    sent: Arc<Mutex<Vec<StreamBroadcast>>>,
}

impl RecordingSender {
    pub fn sent(&self) -> Vec<StreamBroadcast> {
        self.sent.lock().unwrap().clone()
    }

    pub fn dom_targets(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .map(|broadcast| broadcast.dom_target)
            .collect()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

#[async_trait]
impl BroadcastSender for RecordingSender {
    async fn send_broadcast(&self, broadcast: StreamBroadcast) -> CoreErrorResult<usize> {
        self.sent.lock().unwrap().push(broadcast);
        Ok(1)
    }
}
