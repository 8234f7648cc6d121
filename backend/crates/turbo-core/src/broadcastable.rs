use crate::{
    BroadcastContext, CoreError, MODEL_TEMPLATE_KEY, Result as CoreErrorResult, StreamAction,
    StreamBroadcast, Target,
};

/// Capability of producing turbo-stream broadcasts for a target.
///
/// Implementors must provide `turbo_streams_template` and `dom_target`;
/// the defaults fail with [`CoreError::NotImplemented`].
pub trait Broadcastable {
    /// Template id rendered for `target`
    fn turbo_streams_template(&self, _target: &Target) -> CoreErrorResult<String> {
        Err(CoreError::not_implemented("turbo_streams_template"))
    }

    /// DOM id (and channel name) the broadcast for `target` is addressed to
    fn dom_target(&self, _target: &Target) -> CoreErrorResult<String> {
        Err(CoreError::not_implemented("dom_target"))
    }

    /// Extra template variables. Empty unless overridden.
    fn append_context(&self, _target: &Target) -> CoreErrorResult<BroadcastContext> {
        Ok(BroadcastContext::new())
    }

    /// `model_template` merged with [`Broadcastable::append_context`]
    fn context(&self, target: &Target) -> CoreErrorResult<BroadcastContext> {
        let mut context = BroadcastContext::new();
        context.insert(MODEL_TEMPLATE_KEY, self.turbo_streams_template(target)?);
        context.merge(self.append_context(target)?);
        Ok(context)
    }

    /// Assemble the outbound broadcast for `target`
    fn stream_broadcast(
        &self,
        target: &Target,
        action: StreamAction,
    ) -> CoreErrorResult<StreamBroadcast> {
        Ok(StreamBroadcast {
            dom_target: self.dom_target(target)?,
            action,
            template: self.turbo_streams_template(target)?,
            context: self.context(target)?,
        })
    }
}
