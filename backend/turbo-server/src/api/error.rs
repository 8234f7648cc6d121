//! REST API errors.
//!
//! Rendered as `{"error": {"code", "message", "field"?}}`.

use turbo_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("invalid {field}: {message} {location}")]
    Validation {
        message: String,
        field: String,
        location: ErrorLocation,
    },

    #[error("bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("internal: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

#[derive(Serialize)]
struct Envelope<'a> {
    error: Body<'a>,
}

#[derive(Serialize)]
struct Body<'a> {
    code: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.to_owned(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code for clients
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::NotFound { message, .. }
            | Self::Validation { message, .. }
            | Self::BadRequest { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{self}");
        } else {
            log::debug!("{self}");
        }

        let field = match &self {
            Self::Validation { field, .. } => Some(field.as_str()),
            _ => None,
        };
        let envelope = Envelope {
            error: Body {
                code: self.code(),
                message: self.message(),
                field,
            },
        };

        (status, Json(envelope)).into_response()
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::NotFound { label, id, .. } => Self::NotFound {
                message: format!("{label} {id} not found"),
                location,
            },
            DbError::NotPersisted { label, .. } => Self::BadRequest {
                message: format!("{label} has not been saved"),
                location,
            },
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => Self::NotFound {
                message: String::from("Resource not found"),
                location,
            },
            other => {
                // Details stay in the log
                log::error!("Database error: {other}");
                Self::Internal {
                    message: String::from("Database operation failed"),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
