mod models;

use crate::{
    BroadcastSender, BroadcastableModel, CoreError, ModelMeta, Post, Relation,
    Result as CoreErrorResult, StreamAction, StreamBroadcast, Target,
};

use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;

/// Sender that records every broadcast instead of delivering it
#[derive(Default)]
pub(crate) struct RecordingSender {
    sent: Mutex<Vec<StreamBroadcast>>,
    failing_target: Option<String>,
}

impl RecordingSender {
    pub(crate) fn failing_on(dom_target: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing_target: Some(dom_target.to_string()),
        }
    }

    pub(crate) fn sent(&self) -> Vec<StreamBroadcast> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl BroadcastSender for RecordingSender {
    async fn send_broadcast(&self, broadcast: StreamBroadcast) -> CoreErrorResult<usize> {
        if self.failing_target.as_deref() == Some(broadcast.dom_target.as_str()) {
            return Err(CoreError::broadcast("receiver unavailable"));
        }
        self.sent.lock().unwrap().push(broadcast);
        Ok(1)
    }
}

/// Model exercising every policy knob: no self broadcast, a template
/// override, a nullable relation, a literal channel and a duplicate
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Reaction {
    pub id: Option<i64>,
    pub post_id: Option<i64>,
    pub emoji: String,
}

impl BroadcastableModel for Reaction {
    const META: ModelMeta = ModelMeta::new("blog", "Reaction", "Reaction", "Reactions");
    const BROADCAST_SELF: bool = false;
    const INSERTS_BY: StreamAction = StreamAction::Prepend;
    const TURBO_STREAMS_TEMPLATE: Option<&'static str> = Some("blog/reaction_badge.html");

    fn pk(&self) -> Option<i64> {
        self.id
    }

    fn broadcasts_to() -> Vec<Relation<Self>> {
        vec![
            Relation::field("post", |reaction: &Reaction| {
                reaction.post_id.map(|id| Target::model(Post::META, Some(id)))
            }),
            Relation::channel("Activity_Feed"),
            Relation::field("post", |reaction: &Reaction| {
                reaction.post_id.map(|id| Target::model(Post::META, Some(id)))
            }),
        ]
    }
}
