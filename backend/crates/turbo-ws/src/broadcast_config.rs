/// Delivery settings for stream channels and subscriber sockets
#[derive(Debug, Clone)]
pub struct BroadcastConfig {
    /// Channel capacity per stream (bounded to prevent memory exhaustion)
    pub channel_capacity: usize,
    /// Outgoing frames buffered per connection
    pub send_buffer_size: usize,
    /// Upper bound on concurrent subscribers across all streams
    pub max_connections: usize,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 1000,
            send_buffer_size: 100,
            max_connections: 1000,
        }
    }
}
