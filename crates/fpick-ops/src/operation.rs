//! Batch operation kinds and per-item error records.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The operation a batch applies to each selected path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum BatchKind {
    Copy,
    Move,
    Delete,
}

impl BatchKind {
    /// Whether the operation needs a destination directory.
    pub fn requires_destination(self) -> bool {
        matches!(self, Self::Copy | Self::Move)
    }

    /// Past-tense verb for summaries.
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Copy => "Copied",
            Self::Move => "Moved",
            Self::Delete => "Deleted",
        }
    }
}

/// An item that failed during a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationError {
    /// The selected path that failed.
    pub path: PathBuf,
    /// The message reported for it.
    pub message: String,
}

impl OperationError {
    /// Create a new operation error.
    pub fn new(path: PathBuf, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_titles() {
        assert_eq!(BatchKind::Copy.to_string(), "Copy");
        assert_eq!(BatchKind::from_str("delete").unwrap(), BatchKind::Delete);
        assert!(BatchKind::Move.requires_destination());
        assert!(!BatchKind::Delete.requires_destination());
    }
}
