use turbo_core::StreamAction;

/// A rendered turbo-stream fragment on its way to subscribers
#[derive(Debug, Clone)]
pub struct StreamMessage {
    /// Stream (DOM target) the fragment was published to
    pub stream: String,
    /// Action for metrics/logging
    pub action: StreamAction,
    /// `<turbo-stream>` element, ready to send as a text frame
    pub payload: String,
}

impl StreamMessage {
    pub fn new(stream: impl Into<String>, action: StreamAction, payload: String) -> Self {
        Self {
            stream: stream.into(),
            action,
            payload,
        }
    }
}
