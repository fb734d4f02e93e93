//! The pending, single-use selection.

use std::path::PathBuf;

/// Ordered set of absolute paths chosen by index, pending a batch.
///
/// Duplicates are kept. [`Selection::take`] hands out the contents and
/// leaves the selection empty, so each selection feeds at most one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    paths: Vec<PathBuf>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current contents wholesale.
    pub fn replace(&mut self, paths: Vec<PathBuf>) {
        self.paths = paths;
    }

    /// Return the current contents and clear the selection.
    pub fn take(&mut self) -> Vec<PathBuf> {
        std::mem::take(&mut self.paths)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl From<Vec<PathBuf>> for Selection {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears() {
        let mut selection = Selection::from(vec![PathBuf::from("/a"), PathBuf::from("/b")]);

        assert_eq!(selection.take().len(), 2);
        assert!(selection.is_empty());
        assert!(selection.take().is_empty());
    }
}
