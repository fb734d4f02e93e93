//! Batch file operations engine for fpick.
//!
//! A batch takes the current [`Selection`](fpick_core::Selection), checks the
//! destination once when the operation needs one, then applies copy, move or
//! delete to every selected path in order. A failing item is reported to the
//! [`ErrorSink`](fpick_core::ErrorSink) and the batch moves on to the next
//! one; the returned [`BatchReport`] counts exactly what happened.

mod batch;
mod destination;
mod error;
mod fs_ops;
mod operation;
mod report;

pub use batch::BatchProcessor;
pub use destination::{is_valid_destination, validate_destination};
pub use error::{ItemFailure, OpError};
pub use fs_ops::{FileSystemOps, LocalFileSystem};
pub use operation::{BatchKind, OperationError};
pub use report::BatchReport;
