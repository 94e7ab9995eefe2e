//! Error types for the logging library

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Failures a caller can observe. All of these are local: the operation
/// returns no usable object, and the condition is also reported through the
/// default logger's error channel. Nothing here terminates the process.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A logger with this identifier is already registered
    #[error("logger '{identifier}' already exists in the registry")]
    DuplicateLogger { identifier: String },

    /// A destination with this identifier is already attached to the logger
    #[error("destination '{identifier}' already attached to this logger")]
    DuplicateDestination { identifier: String },

    /// File target could not be created or opened
    #[error("file destination target '{path}' is unusable: {message}")]
    FileTarget { path: String, message: String },

    /// Inconsistent configuration, reported but never auto-corrected
    #[error("invalid configuration for '{identifier}': {message}")]
    InvalidConfiguration { identifier: String, message: String },
}

impl LoggerError {
    pub fn duplicate_logger(identifier: impl Into<String>) -> Self {
        LoggerError::DuplicateLogger {
            identifier: identifier.into(),
        }
    }

    pub fn duplicate_destination(identifier: impl Into<String>) -> Self {
        LoggerError::DuplicateDestination {
            identifier: identifier.into(),
        }
    }

    pub fn file_target(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileTarget {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            identifier: identifier.into(),
            message: message.into(),
        }
    }
}
