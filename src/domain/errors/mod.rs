// Domain errors - Error types for the domain layer

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug)]
pub enum DomainError {
    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),

    /// Target path does not exist
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// External tool ran but exited unsuccessfully
    #[error("{tool} failed ({status}): {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    /// External tool could not be started
    #[error("Failed to run {tool}: {source}")]
    ToolUnavailable {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool produced output we could not understand
    #[error("Unexpected output from {tool}: {message}")]
    MalformedOutput { tool: String, message: String },

    /// Filesystem operation failed
    #[error("File system error on {}: {source}", path.display())]
    Fs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    /// Wrap an I/O error with the path it happened on
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DomainError::Fs {
            path: path.into(),
            source,
        }
    }

    /// Short label for the error kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::BadArgs(_) => "bad-args",
            DomainError::PathNotFound(_) => "path-not-found",
            DomainError::ToolFailed { .. } => "tool-failed",
            DomainError::ToolUnavailable { .. } => "tool-unavailable",
            DomainError::MalformedOutput { .. } => "malformed-output",
            DomainError::Fs { .. } => "fs",
            DomainError::Config(_) => "config",
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = std::result::Result<T, DomainError>;
