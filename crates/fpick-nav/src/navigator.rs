//! Current-directory context and movement between directories.

use std::path::{Path, PathBuf};

use fpick_core::{ErrorSink, Listing, NavError};

use crate::listing::PathListing;

/// Keeps the directory in view and its most recent listing.
///
/// Indices passed to [`Navigator::navigate`] address the listing returned
/// by the last [`Navigator::list_contents`] (or the refresh that follows
/// every directory change).
#[derive(Debug)]
pub struct Navigator<L> {
    lister: L,
    current_path: PathBuf,
    listing: Listing,
}

impl<L: PathListing> Navigator<L> {
    /// Create a navigator looking at `start`.
    ///
    /// Relative paths are made absolute against the working directory.
    pub fn new(lister: L, start: impl Into<PathBuf>) -> Self {
        let start = start.into();
        let current_path = std::path::absolute(&start).unwrap_or(start);

        Self {
            lister,
            listing: Listing::empty(&current_path),
            current_path,
        }
    }

    /// Create a navigator looking at the user's home directory.
    pub fn at_home(lister: L) -> Self {
        let home = dirs::home_dir()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("/"));
        Self::new(lister, home)
    }

    /// The directory currently in view.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// The most recent listing, without re-reading the directory.
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Re-read the current directory.
    ///
    /// A listing failure is reported to `sink` and leaves an empty listing.
    pub fn list_contents(&mut self, sink: &mut dyn ErrorSink) -> &Listing {
        self.listing = match self.lister.list(&self.current_path) {
            Ok(listing) => listing,
            Err(e) => {
                tracing::warn!(path = %self.current_path.display(), error = %e, "listing failed");
                sink.report_error(&e.to_string());
                Listing::empty(&self.current_path)
            }
        };
        &self.listing
    }

    /// Descend into the directory at `index` and refresh the listing.
    ///
    /// Files and out-of-range indices are reported to `sink`; returns
    /// whether the directory changed.
    pub fn navigate(&mut self, index: usize, sink: &mut dyn ErrorSink) -> bool {
        match self.enter(index) {
            Ok(()) => {
                self.list_contents(sink);
                true
            }
            Err(e) => {
                sink.report_error(&e.to_string());
                false
            }
        }
    }

    /// Point at the directory at `index` of the current listing. State is
    /// unchanged on error.
    ///
    /// The old listing belongs to the parent, so it is cleared until the
    /// caller refreshes.
    fn enter(&mut self, index: usize) -> Result<(), NavError> {
        let (Some(entry), Some(target)) = (self.listing.get(index), self.listing.path_of(index))
        else {
            return Err(NavError::IndexOutOfRange {
                index,
                len: self.listing.len(),
            });
        };

        if !entry.is_dir() {
            return Err(NavError::NotADirectory {
                name: entry.name.to_string(),
            });
        }

        tracing::debug!(path = %target.display(), "entered directory");
        self.listing = Listing::empty(&target);
        self.current_path = target;
        Ok(())
    }

    /// Move to the parent directory and refresh the listing.
    ///
    /// The filesystem root is terminal: ascending from it is a no-op that
    /// returns `false`.
    pub fn go_to_parent(&mut self, sink: &mut dyn ErrorSink) -> bool {
        let Some(parent) = self.current_path.parent() else {
            tracing::debug!(path = %self.current_path.display(), "already at root");
            return false;
        };

        self.current_path = parent.to_path_buf();
        tracing::debug!(path = %self.current_path.display(), "moved to parent");
        self.list_contents(sink);
        true
    }
}
