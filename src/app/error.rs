use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Decode error: invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Compile error: {0}")]
    Compile(String),

    #[error("Diagram compiler not available ({}): {reason}", .program.display())]
    CompilerUnavailable { program: PathBuf, reason: String },

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl AppError {
    /// True for the decode family (malformed JSON or base64).
    pub fn is_decode(&self) -> bool {
        matches!(self, AppError::Decode(_) | AppError::Base64(_))
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
