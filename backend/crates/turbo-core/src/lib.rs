pub mod broadcast_context;
pub mod broadcast_sender;
pub mod broadcastable;
pub mod broadcastable_model;
pub mod error;
pub mod lifecycle_event;
pub mod model_broadcaster;
pub mod model_meta;
pub mod models;
pub mod relation;
pub mod stream_action;
pub mod stream_broadcast;
pub mod target;

pub use broadcast_context::{BroadcastContext, MODEL_TEMPLATE_KEY, OBJECT_KEY};
pub use broadcast_sender::BroadcastSender;
pub use broadcastable::Broadcastable;
pub use broadcastable_model::BroadcastableModel;
pub use error::{CoreError, Result};
pub use lifecycle_event::LifecycleEvent;
pub use model_broadcaster::ModelBroadcaster;
pub use model_meta::ModelMeta;
pub use models::comment::Comment;
pub use models::post::Post;
pub use relation::Relation;
pub use stream_action::StreamAction;
pub use stream_broadcast::StreamBroadcast;
pub use target::{ModelRef, Target};

#[cfg(test)]
mod tests;
