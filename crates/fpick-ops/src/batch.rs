//! The batch loop: one fixed snapshot, every item attempted.

use std::path::Path;

use fpick_core::{DestinationError, ErrorSink, Selection};

use crate::destination::validate_destination;
use crate::{BatchKind, BatchReport, FileSystemOps, ItemFailure, OperationError};

/// Applies a [`BatchKind`] to every path of a consumed selection.
///
/// Failures are isolated per item: each one is reported to the sink, in
/// processing order, and the loop continues with the next path.
#[derive(Debug)]
pub struct BatchProcessor<F, S> {
    fs: F,
    sink: S,
}

impl<F: FileSystemOps, S: ErrorSink> BatchProcessor<F, S> {
    /// Create a processor acting through `fs` and reporting to `sink`.
    pub fn new(fs: F, sink: S) -> Self {
        Self { fs, sink }
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (F, S) {
        (self.fs, self.sink)
    }

    /// Take `selection` and apply `kind` to each of its paths.
    ///
    /// The selection is empty afterwards. For copy and move the destination
    /// is validated once up front; if it is invalid every item fails with the
    /// validation message and the filesystem is never touched. `destination`
    /// is ignored for delete.
    pub fn run_batch(
        &mut self,
        selection: &mut Selection,
        kind: BatchKind,
        destination: Option<&Path>,
    ) -> BatchReport {
        let items = selection.take();
        let mut report = BatchReport::new(kind, items.len());

        tracing::info!(%kind, items = items.len(), "batch started");

        let checked: Result<Option<&Path>, DestinationError> = if kind.requires_destination() {
            validate_destination(destination).map(Some)
        } else {
            Ok(None)
        };
        if let Err(e) = &checked {
            tracing::warn!(%kind, error = %e, "destination rejected");
        }

        for path in items {
            let outcome = match &checked {
                Ok(target) => self.apply(kind, &path, *target),
                Err(e) => Err(ItemFailure::Destination(e.clone())),
            };

            match outcome {
                Ok(()) => {
                    tracing::debug!(%kind, path = %path.display(), "item done");
                    report.record_success();
                }
                Err(failure) => {
                    let message = failure.to_string();
                    tracing::warn!(%kind, path = %path.display(), error = %message, "item failed");
                    self.sink.report_error(&message);
                    report.record_failure(OperationError::new(path, message));
                }
            }
        }

        tracing::info!(
            %kind,
            succeeded = report.succeeded,
            failed = report.failed,
            "batch finished"
        );
        report
    }

    /// Copy the selection into `destination`; returns the success count.
    pub fn copy_selected(&mut self, selection: &mut Selection, destination: Option<&Path>) -> usize {
        self.run_batch(selection, BatchKind::Copy, destination).succeeded
    }

    /// Move the selection into `destination`; returns the success count.
    pub fn move_selected(&mut self, selection: &mut Selection, destination: Option<&Path>) -> usize {
        self.run_batch(selection, BatchKind::Move, destination).succeeded
    }

    /// Delete the selection; returns the success count.
    pub fn delete_selected(&mut self, selection: &mut Selection) -> usize {
        self.run_batch(selection, BatchKind::Delete, None).succeeded
    }

    fn apply(&self, kind: BatchKind, path: &Path, target: Option<&Path>) -> Result<(), ItemFailure> {
        let result = match (kind, target) {
            (BatchKind::Delete, _) => self.fs.delete(path),
            (BatchKind::Copy, Some(target)) => self.fs.copy(path, target),
            (BatchKind::Move, Some(target)) => self.fs.move_to(path, target),
            (BatchKind::Copy | BatchKind::Move, None) => {
                return Err(DestinationError::NotProvided.into());
            }
        };
        result.map_err(|source| ItemFailure::Operation { kind, source })
    }
}
