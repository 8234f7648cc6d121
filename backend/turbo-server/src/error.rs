use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] turbo_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] turbo_db::DbError),

    #[error("Template error: {0}")]
    Templates(#[from] turbo_ws::WsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
