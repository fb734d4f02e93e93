//! Directory entries and positional listings.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Classification of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// One filesystem object as seen during a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Name as returned by the directory listing (not a full path).
    pub name: CompactString,
    /// Whether this is a file or a directory.
    pub kind: EntryKind,
}

impl Entry {
    /// Create a new entry.
    pub fn new(name: impl Into<CompactString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a file entry.
    pub fn file(name: impl Into<CompactString>) -> Self {
        Self::new(name, EntryKind::File)
    }

    /// Create a directory entry.
    pub fn directory(name: impl Into<CompactString>) -> Self {
        Self::new(name, EntryKind::Directory)
    }

    /// Check if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Positionally indexed snapshot of a directory's entries.
///
/// Index order is the order the entries were produced in. A listing is
/// replaced wholesale whenever the directory in view changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    directory: PathBuf,
    entries: Vec<Entry>,
}

impl Listing {
    /// Create a listing of `directory` from already collected entries.
    pub fn new(directory: impl Into<PathBuf>, entries: Vec<Entry>) -> Self {
        Self {
            directory: directory.into(),
            entries,
        }
    }

    /// Create an empty listing for `directory`.
    pub fn empty(directory: impl Into<PathBuf>) -> Self {
        Self::new(directory, Vec::new())
    }

    /// The directory this listing was taken from.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Resolve the absolute path of the entry at `index`.
    pub fn path_of(&self, index: usize) -> Option<PathBuf> {
        self.get(index)
            .map(|entry| self.directory.join(entry.name.as_str()))
    }

    /// Iterate over `(index, entry)` pairs in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries.iter().enumerate()
    }
}
