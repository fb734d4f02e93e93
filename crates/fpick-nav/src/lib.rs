//! Directory listing, navigation and index selection for fpick.
//!
//! # Overview
//!
//! - [`DirLister`] lists one directory level and classifies each entry.
//! - [`Navigator`] keeps the directory in view and its most recent listing.
//! - [`Selector`] turns a comma-separated index spec into a [`Selection`]
//!   of absolute paths, consumed once by a batch run.
//!
//! # Example
//!
//! ```rust,no_run
//! use fpick_nav::{DirLister, Navigator, Selector};
//!
//! let mut errors: Vec<String> = Vec::new();
//! let mut navigator = Navigator::at_home(DirLister::new());
//! let listing = navigator.list_contents(&mut errors).clone();
//!
//! let mut selector = Selector::new();
//! selector.select_by_indices("0, 2", &listing, &mut errors);
//! let paths = selector.take_selection();
//! println!("{} paths picked", paths.len());
//! ```

mod listing;
mod navigator;
mod selector;

pub use listing::{DirLister, PathListing};
pub use navigator::Navigator;
pub use selector::{Selector, parse_index_spec};

// Re-export core types for convenience
pub use fpick_core::{Entry, EntryKind, ErrorSink, ListError, Listing, NavError, Selection, SelectionError};
