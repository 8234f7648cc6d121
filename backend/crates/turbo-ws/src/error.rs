use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Connection limit reached: {current}/{max} {location}")]
    ConnectionLimitExceeded {
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Send buffer full, client too slow {location}")]
    SendBufferFull { location: ErrorLocation },

    #[error("Template not found: {template} {location}")]
    TemplateNotFound {
        template: String,
        location: ErrorLocation,
    },

    #[error("Failed to read templates from {path}: {source} {location}")]
    TemplateIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl WsError {
    #[track_caller]
    pub fn template_not_found(template: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            template: template.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConnectionClosed { .. } => "connection_closed",
            Self::ConnectionLimitExceeded { .. } => "connection_limit",
            Self::SendBufferFull { .. } => "slow_client",
            Self::TemplateNotFound { .. } => "template_not_found",
            Self::TemplateIo { .. } => "template_io",
        }
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
