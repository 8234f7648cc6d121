use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CHANNEL_CAPACITY, DEFAULT_SEND_BUFFER_SIZE,
    DEFAULT_TEMPLATE_DIR, MAX_CHANNEL_CAPACITY, MAX_SEND_BUFFER_SIZE, MIN_CHANNEL_CAPACITY,
    MIN_SEND_BUFFER_SIZE, check_range,
};

use serde::Deserialize;

/// Turbo-stream delivery settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Messages buffered per stream channel before slow subscribers lag
    pub channel_capacity: usize,
    /// Outgoing frames buffered per websocket connection
    pub send_buffer_size: usize,
    /// Directory of stream templates, relative to the config directory
    pub template_dir: String,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            send_buffer_size: DEFAULT_SEND_BUFFER_SIZE,
            template_dir: String::from(DEFAULT_TEMPLATE_DIR),
        }
    }
}

impl BroadcastConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "broadcast.channel_capacity",
            self.channel_capacity,
            MIN_CHANNEL_CAPACITY,
            MAX_CHANNEL_CAPACITY,
        )?;
        check_range(
            "broadcast.send_buffer_size",
            self.send_buffer_size,
            MIN_SEND_BUFFER_SIZE,
            MAX_SEND_BUFFER_SIZE,
        )?;

        if self.template_dir.contains("..") {
            return Err(ConfigError::invalid(
                "broadcast.template_dir",
                "cannot contain '..'",
            ));
        }

        Ok(())
    }
}
