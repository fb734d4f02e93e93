//! Core types and contracts for fpick.
//!
//! This crate provides the data model shared by the navigation and batch
//! operation crates: directory entries and listings, the single-use
//! selection, the user-facing error sink, error types and settings.

mod config;
mod entry;
mod error;
mod selection;
mod sink;

pub use config::{Settings, SettingsBuilder, SettingsError};
pub use entry::{Entry, EntryKind, Listing};
pub use error::{DestinationError, ListError, NavError, SelectionError};
pub use selection::Selection;
pub use sink::ErrorSink;
