//! Error types module
//!
//! Every failure the proxy can hit is a `MediaError`. The variants exist for logging
//! only: at the HTTP boundary they all render the same way.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for failures reported by the vendor
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// Rejected locally before any vendor call.
    #[error("{0}")]
    Validation(String),

    /// The vendor answered with a non-success status.
    #[error("Vendor error ({status}): {message}")]
    Vendor { status: u16, message: String },

    /// The vendor could not be reached or the exchange was cut short.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid form data: {0}")]
    Multipart(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to decode vendor response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for MediaError {
    fn from(err: serde_json::Error) -> Self {
        MediaError::Decode(err.to_string())
    }
}

impl MediaError {
    pub fn validation(message: impl Into<String>) -> Self {
        MediaError::Validation(message.into())
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            MediaError::Validation(_) => "Validation",
            MediaError::Vendor { .. } => "Vendor",
            MediaError::Transport(_) => "Transport",
            MediaError::Multipart(_) => "Multipart",
            MediaError::Io(_) => "Io",
            MediaError::Decode(_) => "Decode",
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            MediaError::Validation(_) | MediaError::Multipart(_) => LogLevel::Debug,
            MediaError::Vendor { .. } => LogLevel::Warn,
            MediaError::Transport(_) | MediaError::Io(_) | MediaError::Decode(_) => {
                LogLevel::Error
            }
        }
    }

    /// HTTP status the vendor answered with, when the failure came from the vendor.
    pub fn vendor_status(&self) -> Option<u16> {
        match self {
            MediaError::Vendor { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message shown to API clients. Vendor and validation messages pass through as-is.
    pub fn client_message(&self) -> String {
        match self {
            MediaError::Validation(message) => message.clone(),
            MediaError::Vendor { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
