//! Error types for parachunk.
//!
//! Segmentation itself never fails; these errors come from the edges
//! (reading paragraph sources, loading configuration, rendering output).

use thiserror::Error;

/// Result type alias using ChunkError.
pub type Result<T> = std::result::Result<T, ChunkError>;

/// Errors that can occur around segmentation.
#[derive(Error, Debug)]
pub enum ChunkError {
    /// Invalid argument provided.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Failed to read paragraphs from a source.
    #[error("Failed to load paragraphs from {source_name}: {reason}")]
    SourceFailed { source_name: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ChunkError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a source error.
    pub fn source_failed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceFailed {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Get a stable error code, suitable for machine-readable output.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::SourceFailed { .. } => "SOURCE_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Config { .. } => "CONFIG_ERROR",
        }
    }
}
