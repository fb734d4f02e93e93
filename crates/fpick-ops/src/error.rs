//! Error types for single-item filesystem operations.

use std::path::PathBuf;

use fpick_core::DestinationError;
use thiserror::Error;

use crate::BatchKind;

/// A filesystem action failed for one path.
#[derive(Debug, Error)]
pub enum OpError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("No such file or directory: {path}")]
    NotFound { path: PathBuf },

    /// Source and target are the same path.
    #[error("Source and destination are the same file: {path}")]
    SameFile { path: PathBuf },

    /// A directory cannot be copied or moved inside itself.
    #[error("Cannot copy/move a directory into itself: {path}")]
    IntoItself { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The trash backend refused the item.
    #[error("Failed to move {path} to trash: {message}")]
    Trash { path: PathBuf, message: String },

    /// Other error.
    #[error("{message}")]
    Other { message: String },
}

impl OpError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create an error carrying only a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// Why one item of a batch was not applied.
#[derive(Debug, Error)]
pub enum ItemFailure {
    /// The destination check failed; the action was never invoked.
    #[error(transparent)]
    Destination(#[from] DestinationError),

    /// The action ran and failed.
    #[error("{kind}: {source}")]
    Operation {
        kind: BatchKind,
        #[source]
        source: OpError,
    },
}
