use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BUSY_TIMEOUT_SECS, DEFAULT_DATABASE_FILENAME,
    DEFAULT_DATABASE_POOL_SIZE, MAX_BUSY_TIMEOUT_SECS, MAX_DATABASE_POOL_SIZE, check_range,
};

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// SQLite storage for the blog models
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative to the config directory
    pub path: String,
    pub pool_size: u32,
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            pool_size: DEFAULT_DATABASE_POOL_SIZE,
            busy_timeout_secs: DEFAULT_BUSY_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.is_empty() || Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::invalid(
                "database.path",
                "must be relative and cannot contain '..'",
            ));
        }

        check_range(
            "database.pool_size",
            self.pool_size,
            1,
            MAX_DATABASE_POOL_SIZE,
        )?;
        check_range(
            "database.busy_timeout_secs",
            self.busy_timeout_secs,
            0,
            MAX_BUSY_TIMEOUT_SECS,
        )
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_secs)
    }
}
