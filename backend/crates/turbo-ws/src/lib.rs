pub mod broadcast_config;
pub mod channel_sender;
pub mod connection_id;
pub mod error;
pub mod metrics;
pub mod shutdown;
pub mod stream_broadcaster;
pub mod stream_connection;
pub mod stream_message;
pub mod stream_state;
pub mod template_renderer;
pub mod turbo_stream;

pub use broadcast_config::BroadcastConfig;
pub use channel_sender::ChannelSender;
pub use connection_id::ConnectionId;
pub use error::{Result, WsError};
pub use metrics::Metrics;
pub use shutdown::{ShutdownCoordinator, ShutdownGuard};
pub use stream_broadcaster::StreamBroadcaster;
pub use stream_connection::StreamConnection;
pub use stream_message::StreamMessage;
pub use stream_state::{StreamState, handler};
pub use template_renderer::{TemplateRegistry, TemplateRenderer};
pub use turbo_stream::render_stream;

#[cfg(test)]
mod tests;
