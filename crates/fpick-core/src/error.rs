//! Error types for listing, navigation, selection and destination checks.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while listing a directory.
#[derive(Debug, Error)]
pub enum ListError {
    /// Permission denied for a directory.
    #[error("Access denied to this directory: {path}")]
    PermissionDenied { path: PathBuf },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ListError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Errors that can occur while changing the directory in view.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// The index does not address an entry of the current listing.
    #[error("Navigation error: index {index} out of range (listing has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The entry is a file.
    #[error("Cannot open file {name}")]
    NotADirectory { name: String },
}

/// A malformed index spec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// A token is not an integer.
    #[error("Invalid input. Please enter valid indices. ('{token}' is not a number)")]
    InvalidIndex { token: String },
}

/// A destination that cannot receive copied or moved items.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DestinationError {
    #[error("Destination path is not provided")]
    NotProvided,

    #[error("Destination path does not exist")]
    DoesNotExist { path: PathBuf },

    #[error("Destination path is not a directory")]
    NotADirectory { path: PathBuf },
}
