use metrics::{counter, gauge, histogram};

/// Metrics collector for stream delivery
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "turbo_ws" }
    }

    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    pub fn connection_rejected(&self) {
        counter!(format!("{}.connections.rejected", self.prefix)).increment(1);
    }

    /// Record a fragment forwarded to one subscriber socket
    pub fn message_sent(&self, action: &str) {
        counter!(format!("{}.messages.sent", self.prefix)).increment(1);
        counter!(format!("{}.messages.sent.{}", self.prefix, action)).increment(1);
    }

    pub fn messages_lagged(&self, skipped: u64) {
        counter!(format!("{}.messages.lagged", self.prefix)).increment(skipped);
    }

    pub fn broadcast_published(&self, action: &str, receivers: usize) {
        counter!(format!("{}.broadcast.published", self.prefix)).increment(1);
        counter!(format!("{}.broadcast.published.{}", self.prefix, action)).increment(1);
        gauge!(format!("{}.broadcast.receivers", self.prefix)).set(receivers as f64);
    }

    pub fn render_latency(&self, duration: std::time::Duration) {
        histogram!(format!("{}.render.latency_ms", self.prefix))
            .record(duration.as_secs_f64() * 1000.0);
    }

    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
