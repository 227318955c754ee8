//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// One or more owned destinations failed to release
    #[error("Failed to close {failed} of {total} log destinations")]
    CloseFailed {
        failed: usize,
        total: usize,
        /// Destination name paired with the error it reported
        errors: Vec<(String, std::io::Error)>,
    },

    /// A configured log file could not be opened
    #[error("File destination error for '{path}': {source}")]
    FileDestination {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an aggregate close error
    pub fn close_failed(total: usize, errors: Vec<(String, std::io::Error)>) -> Self {
        LoggerError::CloseFailed {
            failed: errors.len(),
            total,
            errors,
        }
    }

    /// Create a file destination error
    pub fn file_destination(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileDestination {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
