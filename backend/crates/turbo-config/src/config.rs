use crate::{
    BroadcastConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig, env_overrides,
};

use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::info;
use serde::Deserialize;

/// Server settings. Sources, lowest priority first: built-in defaults,
/// `<config dir>/config.toml`, then `TURBO_*` environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub broadcast: BroadcastConfig,
}

impl Config {
    /// Creates the config directory when missing. A missing `config.toml` is
    /// not an error. Call [`Config::validate`] afterwards.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir).map_err(|source| ConfigError::Io {
            path: config_dir.clone(),
            source,
        })?;

        let mut config = Self::from_file(&config_dir.join(CONFIG_FILENAME))?.unwrap_or_default();
        env_overrides::apply(&mut config);

        Ok(config)
    }

    fn from_file(path: &Path) -> ConfigErrorResult<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents)
            .map(Some)
            .map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })
    }

    /// `$TURBO_CONFIG_DIR`, or `.turbo` under the working directory
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        std::env::current_dir()
            .map(|cwd| cwd.join(DEFAULT_CONFIG_DIR))
            .map_err(|source| ConfigError::ConfigDir {
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.broadcast.validate()?;
        self.database.validate()
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn template_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.broadcast.template_dir))
    }

    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// `None` when logging to stdout
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        Ok(self.logging.file_in(&Self::config_dir()?))
    }

    pub fn log_summary(&self) {
        let ServerConfig {
            host,
            port,
            max_connections,
        } = &self.server;
        info!("server {host}:{port}, up to {max_connections} subscribers");
        info!(
            "database {} (pool {}, busy timeout {}s)",
            self.database.path, self.database.pool_size, self.database.busy_timeout_secs
        );
        info!(
            "broadcast channel capacity {}, send buffer {}, templates in {}",
            self.broadcast.channel_capacity,
            self.broadcast.send_buffer_size,
            self.broadcast.template_dir
        );
    }
}
