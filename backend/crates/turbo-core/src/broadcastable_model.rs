use crate::{
    BroadcastContext, Broadcastable, LifecycleEvent, ModelMeta, OBJECT_KEY, Relation,
    Result as CoreErrorResult, StreamAction, Target,
};

use log::warn;
use serde::Serialize;

/// Broadcast policy for a persisted model type.
///
/// Every implementor is [`Broadcastable`]: templates and DOM ids are
/// derived from [`BroadcastableModel::META`].
pub trait BroadcastableModel: Serialize + Send + Sync {
    const META: ModelMeta;

    /// Whether the record's own channel receives broadcasts
    const BROADCAST_SELF: bool = true;

    /// Action used when a record is created
    const INSERTS_BY: StreamAction = StreamAction::Append;

    /// Explicit template id, overriding `{app}/{model}.html`
    const TURBO_STREAMS_TEMPLATE: Option<&'static str> = None;

    /// Primary key; `None` until the record is first persisted
    fn pk(&self) -> Option<i64>;

    /// Related targets notified after the record itself, in order
    fn broadcasts_to() -> Vec<Relation<Self>>
    where
        Self: Sized,
    {
        Vec::new()
    }

    fn as_target(&self) -> Target {
        Target::model(Self::META, self.pk())
    }

    fn action(&self, event: LifecycleEvent) -> StreamAction {
        match event {
            LifecycleEvent::Created => Self::INSERTS_BY,
            LifecycleEvent::Updated => StreamAction::Replace,
            LifecycleEvent::Deleted => StreamAction::Remove,
        }
    }

    /// Like [`BroadcastableModel::action`] for an event given by name.
    /// Unrecognized names fall back to `replace`.
    fn action_for_name(&self, event: &str) -> StreamAction {
        match event.parse::<LifecycleEvent>() {
            Ok(event) => self.action(event),
            Err(_) => {
                warn!(
                    "Unrecognized lifecycle event '{}' for {}, falling back to replace",
                    event,
                    Self::META
                );
                StreamAction::Replace
            }
        }
    }
}

impl<M: BroadcastableModel> Broadcastable for M {
    fn turbo_streams_template(&self, _target: &Target) -> CoreErrorResult<String> {
        Ok(match M::TURBO_STREAMS_TEMPLATE {
            Some(template) => template.to_string(),
            None => M::META.default_template(),
        })
    }

    /// A target of another model type maps to its collection id. A target of
    /// this model type maps to `<label>_<pk>` using the *target's* pk, not
    /// `self`'s; the two differ only for a self-referential relation.
    fn dom_target(&self, target: &Target) -> CoreErrorResult<String> {
        match target {
            Target::Model(model) if model.meta != M::META => Ok(model.meta.collection_dom_id()),
            Target::Model(model) => model.meta.record_dom_id(model.pk),
            Target::Channel(name) => Ok(name.to_lowercase()),
        }
    }

    fn append_context(&self, _target: &Target) -> CoreErrorResult<BroadcastContext> {
        let mut context = BroadcastContext::new();
        context.insert_serialized(OBJECT_KEY, self)?;
        context.insert_serialized(M::META.context_key(), self)?;
        Ok(context)
    }
}
