//! Aggregate result of a batch run.

use serde::{Deserialize, Serialize};

use crate::{BatchKind, OperationError};

/// Outcome of one batch run.
///
/// `succeeded + failed == total`, where `total` is the size of the selection
/// taken when the batch started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// The operation applied.
    pub kind: BatchKind,
    /// Number of items taken from the selection.
    pub total: usize,
    /// Number of items the action completed for.
    pub succeeded: usize,
    /// Number of items that failed or were skipped.
    pub failed: usize,
    /// Failed items in processing order.
    pub errors: Vec<OperationError>,
}

impl BatchReport {
    pub(crate) fn new(kind: BatchKind, total: usize) -> Self {
        Self {
            kind,
            total,
            succeeded: 0,
            failed: 0,
            errors: Vec::new(),
        }
    }

    pub(crate) fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub(crate) fn record_failure(&mut self, error: OperationError) {
        self.failed += 1;
        self.errors.push(error);
    }

    /// Check if every item succeeded.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Get a human-readable summary of the run.
    pub fn summary(&self) -> String {
        let action = self.kind.past_tense();

        if self.failed == 0 {
            format!("{} {} item(s)", action, self.succeeded)
        } else {
            format!("{} {} item(s), {} failed", action, self.succeeded, self.failed)
        }
    }
}
