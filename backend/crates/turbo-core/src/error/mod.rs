use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Not implemented: {operation} must be provided by the broadcastable type {location}")]
    NotImplemented {
        operation: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid stream action: {value} {location}")]
    InvalidStreamAction {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid lifecycle event: {value} {location}")]
    InvalidLifecycleEvent {
        value: String,
        location: ErrorLocation,
    },

    #[error("Record of {label} has no primary key {location}")]
    MissingPrimaryKey {
        label: String,
        location: ErrorLocation,
    },

    #[error("Context serialization failed: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Broadcast failed: {message} {location}")]
    Broadcast {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn not_implemented(operation: &'static str) -> Self {
        Self::NotImplemented {
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a delivery error for a broadcast sender
    #[track_caller]
    pub fn broadcast<S: Into<String>>(message: S) -> Self {
        Self::Broadcast {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
