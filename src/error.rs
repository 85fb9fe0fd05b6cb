//! Error types for the kona application.
//!
//! This module defines a single error enum covering every failure the server
//! can hit, from configuration through store access to request handling.

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for kona operations.
#[derive(Error, Debug)]
pub enum KonaError {
    /// SQLite store errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Data not found errors
    #[error("Data not found: {message}")]
    DataNotFound { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl KonaError {
    /// HTTP status a handler answers with when this error reaches it
    pub fn status_code(&self) -> StatusCode {
        match self {
            KonaError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            KonaError::DataNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<tokio::task::JoinError> for KonaError {
    fn from(err: tokio::task::JoinError) -> Self {
        KonaError::Server {
            message: format!("Blocking task failed: {}", err),
        }
    }
}

/// Convenience type alias for Results with KonaError
pub type Result<T> = std::result::Result<T, KonaError>;
