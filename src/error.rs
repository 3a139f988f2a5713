//! Error types for tldw.

use thiserror::Error;

/// Library-level error type for tldw operations.
#[derive(Error, Debug)]
pub enum TldwError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0} not found in configuration or environment")]
    ConfigMissing(String),

    #[error("No transcript available for video {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[error("{0}")]
    NotFound(String),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("LLM API error: {0}")]
    OpenAI(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Coarse classification used to pick an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ConfigMissing,
    Upstream,
    InvalidInput,
    Internal,
}

impl TldwError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TldwError::TranscriptUnavailable { .. } | TldwError::NotFound(_) => {
                ErrorKind::NotFound
            }
            TldwError::ConfigMissing(_) => ErrorKind::ConfigMissing,
            TldwError::Upstream(_) | TldwError::OpenAI(_) | TldwError::Http(_) => {
                ErrorKind::Upstream
            }
            TldwError::InvalidInput(_) => ErrorKind::InvalidInput,
            TldwError::Config(_)
            | TldwError::Storage(_)
            | TldwError::Io(_)
            | TldwError::Json(_)
            | TldwError::TomlParse(_)
            | TldwError::Database(_) => ErrorKind::Internal,
        }
    }
}

/// Result type alias for tldw operations.
pub type Result<T> = std::result::Result<T, TldwError>;
