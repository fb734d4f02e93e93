//! Index-spec parsing and the current selection.

use std::path::PathBuf;

use fpick_core::{ErrorSink, Listing, Selection, SelectionError};

/// Parse a comma-separated list of integers.
///
/// Tokens are trimmed. A blank spec is an empty list; any token that is not
/// an integer (including an empty token between commas) fails the whole
/// spec. Negative values parse and are left for range filtering.
pub fn parse_index_spec(spec: &str) -> Result<Vec<i64>, SelectionError> {
    if spec.trim().is_empty() {
        return Ok(Vec::new());
    }

    spec.split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<i64>().map_err(|_| SelectionError::InvalidIndex {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Holds the current selection until a batch consumes it.
#[derive(Debug, Default)]
pub struct Selector {
    selection: Selection,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with the entries of `listing` named by `spec`.
    ///
    /// Order and duplicates follow the spec; indices outside the listing are
    /// dropped. On a parse error the previous selection is kept.
    pub fn try_select(
        &mut self,
        spec: &str,
        listing: &Listing,
    ) -> Result<&[PathBuf], SelectionError> {
        let indices = parse_index_spec(spec)?;
        Ok(self.apply(&indices, listing))
    }

    /// Like [`Selector::try_select`], reporting a parse error to `sink` and
    /// returning an empty slice instead.
    pub fn select_by_indices(
        &mut self,
        spec: &str,
        listing: &Listing,
        sink: &mut dyn ErrorSink,
    ) -> &[PathBuf] {
        match parse_index_spec(spec) {
            Ok(indices) => self.apply(&indices, listing),
            Err(e) => {
                tracing::debug!(spec, "rejected index spec");
                sink.report_error(&e.to_string());
                &[]
            }
        }
    }

    fn apply(&mut self, indices: &[i64], listing: &Listing) -> &[PathBuf] {
        let paths: Vec<PathBuf> = indices
            .iter()
            .filter_map(|&index| usize::try_from(index).ok())
            .filter_map(|index| listing.path_of(index))
            .collect();

        let dropped = indices.len() - paths.len();
        if dropped > 0 {
            tracing::debug!(dropped, listed = listing.len(), "ignored out-of-range indices");
        }

        self.selection.replace(paths);
        self.selection.paths()
    }

    /// Return the selected paths and clear the selection.
    pub fn take_selection(&mut self) -> Vec<PathBuf> {
        self.selection.take()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selection itself, for handing to a batch run.
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }
}
