//! Error types and handling infrastructure for backread.
//!
//! Every fallible operation returns [`Result`], whose error is [`BackreadError`].
//! The variants fall into three families that callers are expected to branch on:
//!
//! - **End of file**: [`BackreadError::EndOfFile`], the normal termination of
//!   backward iteration. Not a failure.
//! - **Closed**: [`BackreadError::Closed`], any I/O attempted after `close()`.
//! - **Resource errors**: opening, seeking or reading the underlying file failed
//!   (`FileError`, `FileNotFound`, `PermissionDenied`, `NotAFile`).
//!
//! Nothing in the crate retries; errors go straight back to the caller.

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// The main error type for backread operations.
#[derive(Error, Debug)]
pub enum BackreadError {
    /// File system related errors (seek or read failures, device errors, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found specifically (common case for user feedback)
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// Permission denied accessing file
    #[error("Permission denied accessing file: {path}")]
    PermissionDenied { path: PathBuf },

    /// The reader was closed before this operation
    #[error("Reader has been closed")]
    Closed,

    /// The start of the file was reached; there are no earlier lines
    #[error("Reached start of file")]
    EndOfFile,

    /// A line was not valid UTF-8 while strict decoding was requested
    #[error("Invalid UTF-8 in line starting at byte {offset}")]
    InvalidUtf8 {
        offset: u64,
        #[source]
        source: FromUtf8Error,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

/// Standard Result type for backread operations.
pub type Result<T> = std::result::Result<T, BackreadError>;

impl BackreadError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Map an io::Error raised while opening `path` to the most specific variant
    pub(crate) fn from_open(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path: path.into() },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path: path.into() },
            _ => Self::FileError {
                message: format!("Failed to open file: {}", path.into().display()),
                source: err,
            },
        }
    }

    /// True when backward iteration simply ran out of lines
    pub fn is_end_of_file(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// True when the reader was used after `close()`
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// True for failures of the underlying file (open, seek, read)
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            Self::FileError { .. }
                | Self::FileNotFound { .. }
                | Self::NotAFile { .. }
                | Self::PermissionDenied { .. }
        )
    }
}

impl From<std::io::Error> for BackreadError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "File not found",
            std::io::ErrorKind::PermissionDenied => "Permission denied",
            std::io::ErrorKind::UnexpectedEof => "File shrank while reading",
            _ => "IO operation failed",
        };
        Self::FileError {
            message: message.to_string(),
            source: err,
        }
    }
}
