//! Single-level directory listing.

use std::fs;
use std::path::Path;

use compact_str::CompactString;

use fpick_core::{Entry, EntryKind, ListError, Listing, Settings};

/// Provider of directory listings.
pub trait PathListing {
    /// List the entries of `directory` in a fixed positional order.
    fn list(&self, directory: &Path) -> Result<Listing, ListError>;
}

impl<L: PathListing + ?Sized> PathListing for &L {
    fn list(&self, directory: &Path) -> Result<Listing, ListError> {
        (**self).list(directory)
    }
}

/// Lists a directory through `std::fs::read_dir`.
#[derive(Debug, Clone)]
pub struct DirLister {
    include_hidden: bool,
    sort_entries: bool,
}

impl Default for DirLister {
    fn default() -> Self {
        Self::new()
    }
}

impl DirLister {
    /// Create a lister that keeps hidden entries and the platform's order.
    pub fn new() -> Self {
        Self {
            include_hidden: true,
            sort_entries: false,
        }
    }

    /// Create a lister configured from user settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            include_hidden: settings.include_hidden,
            sort_entries: settings.sort_entries,
        }
    }

    /// Include or skip entries whose name starts with a dot.
    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Sort entries by name.
    pub fn with_sorting(mut self, sort_entries: bool) -> Self {
        self.sort_entries = sort_entries;
        self
    }
}

impl PathListing for DirLister {
    fn list(&self, directory: &Path) -> Result<Listing, ListError> {
        let read = fs::read_dir(directory).map_err(|e| ListError::io(directory, e))?;

        let mut entries = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| ListError::io(directory, e))?;
            let name = CompactString::from(entry.file_name().to_string_lossy());

            if !self.include_hidden && name.starts_with('.') {
                continue;
            }

            let kind = classify(&entry.path(), entry.file_type().ok());
            entries.push(Entry::new(name, kind));
        }

        if self.sort_entries {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }

        Ok(Listing::new(directory, entries))
    }
}

/// Classify a path, following symlinks and falling back to the link itself
/// when the target cannot be read.
fn classify(path: &Path, own_type: Option<fs::FileType>) -> EntryKind {
    let is_dir = match fs::metadata(path) {
        Ok(metadata) => metadata.is_dir(),
        Err(_) => own_type.is_some_and(|t| t.is_dir()),
    };

    if is_dir {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}
