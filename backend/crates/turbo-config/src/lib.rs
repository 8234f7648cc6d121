mod broadcast_config;
mod config;
mod database_config;
mod env_overrides;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use broadcast_config::BroadcastConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

use std::fmt::Display;

const CONFIG_DIR_ENV: &str = "TURBO_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".turbo";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 1000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100_000;

const DEFAULT_DATABASE_FILENAME: &str = "turbo.db";
const DEFAULT_DATABASE_POOL_SIZE: u32 = 10;
const MAX_DATABASE_POOL_SIZE: u32 = 100;
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
const MAX_BUSY_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
const MIN_CHANNEL_CAPACITY: usize = 1;
const MAX_CHANNEL_CAPACITY: usize = 100_000;
const DEFAULT_SEND_BUFFER_SIZE: usize = 100;
const MIN_SEND_BUFFER_SIZE: usize = 1;
const MAX_SEND_BUFFER_SIZE: usize = 10_000;
const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Reject `value` outside `min..=max`
#[track_caller]
fn check_range<T>(key: &str, value: T, min: T, max: T) -> ConfigErrorResult<()>
where
    T: PartialOrd + Display,
{
    if value < min || value > max {
        let message = format!("must be {min}-{max}, got {value}");
        return Err(ConfigError::invalid(key, message));
    }
    Ok(())
}
