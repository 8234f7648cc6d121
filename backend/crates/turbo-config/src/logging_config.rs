use crate::{DEFAULT_LOG_DIRECTORY, LogLevel};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Ignored when logging to a file
    pub colored: bool,
    /// File name inside `dir`; stdout when unset
    pub file: Option<String>,
    /// Relative to the config directory
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl LoggingConfig {
    pub fn file_in(&self, config_dir: &Path) -> Option<PathBuf> {
        let name = self.file.as_deref().map(str::trim).filter(|n| !n.is_empty())?;
        Some(config_dir.join(&self.dir).join(name))
    }
}
