use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use fpick_core::Selection;
use fpick_ops::{BatchKind, BatchProcessor, FileSystemOps, OpError};
use tempfile::TempDir;

/// Records every call and fails for the configured paths.
#[derive(Default)]
struct RecordingFs {
    calls: RefCell<Vec<(BatchKind, PathBuf, Option<PathBuf>)>>,
    failing: HashSet<PathBuf>,
}

impl RecordingFs {
    fn failing_on(paths: &[&str]) -> Self {
        Self {
            failing: paths.iter().map(PathBuf::from).collect(),
            ..Default::default()
        }
    }

    fn record(&self, kind: BatchKind, path: &Path, dest: Option<&Path>) -> Result<(), OpError> {
        self.calls
            .borrow_mut()
            .push((kind, path.to_path_buf(), dest.map(Path::to_path_buf)));
        if self.failing.contains(path) {
            Err(OpError::other(format!("{} failed for {}", kind, path.display())))
        } else {
            Ok(())
        }
    }

    fn called_paths(&self) -> Vec<PathBuf> {
        self.calls.borrow().iter().map(|(_, p, _)| p.clone()).collect()
    }
}

impl FileSystemOps for RecordingFs {
    fn copy(&self, source: &Path, destination: &Path) -> Result<(), OpError> {
        self.record(BatchKind::Copy, source, Some(destination))
    }

    fn move_to(&self, source: &Path, destination: &Path) -> Result<(), OpError> {
        self.record(BatchKind::Move, source, Some(destination))
    }

    fn delete(&self, path: &Path) -> Result<(), OpError> {
        self.record(BatchKind::Delete, path, None)
    }
}

fn selection(paths: &[&str]) -> Selection {
    Selection::from(paths.iter().map(PathBuf::from).collect::<Vec<_>>())
}

fn processor(fs: RecordingFs) -> BatchProcessor<RecordingFs, Vec<String>> {
    BatchProcessor::new(fs, Vec::new())
}

#[test]
fn test_copy_all_succeed() {
    let dest = TempDir::new().unwrap();
    let mut batch = processor(RecordingFs::default());
    let mut sel = selection(&["file1.txt", "file2.txt"]);

    let count = batch.copy_selected(&mut sel, Some(dest.path()));

    assert_eq!(count, 2);
    assert!(sel.is_empty());
    assert!(batch.sink().is_empty());
    let calls = batch.fs().calls.borrow().clone();
    assert_eq!(
        calls,
        vec![
            (BatchKind::Copy, PathBuf::from("file1.txt"), Some(dest.path().to_path_buf())),
            (BatchKind::Copy, PathBuf::from("file2.txt"), Some(dest.path().to_path_buf())),
        ]
    );
}

#[test]
fn test_mixed_outcomes_continue_past_failure() {
    let dest = TempDir::new().unwrap();
    let mut batch = processor(RecordingFs::failing_on(&["b.txt"]));
    let mut sel = selection(&["a.txt", "b.txt", "c.txt"]);

    let report = batch.run_batch(&mut sel, BatchKind::Copy, Some(dest.path()));

    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.total, 3);
    assert_eq!(
        batch.fs().called_paths(),
        vec![
            PathBuf::from("a.txt"),
            PathBuf::from("b.txt"),
            PathBuf::from("c.txt")
        ]
    );
    assert_eq!(batch.sink().len(), 1);
    assert!(batch.sink()[0].starts_with("Copy: "));
    assert!(batch.sink()[0].contains("b.txt"));
    assert_eq!(report.errors[0].path, PathBuf::from("b.txt"));
}

#[test]
fn test_delete_ignores_destination() {
    let mut batch = processor(RecordingFs::default());
    let mut sel = selection(&["f1", "d1/"]);

    let report = batch.run_batch(&mut sel, BatchKind::Delete, None);

    assert_eq!(report.succeeded, 2);
    assert!(report.is_success());
    assert!(batch.sink().is_empty());
    assert_eq!(
        batch.fs().called_paths(),
        vec![PathBuf::from("f1"), PathBuf::from("d1/")]
    );
}

#[test]
fn test_delete_failures_carry_title() {
    let mut batch = processor(RecordingFs::failing_on(&["locked"]));
    let mut sel = selection(&["locked", "free"]);

    assert_eq!(batch.delete_selected(&mut sel), 1);
    assert_eq!(batch.sink().len(), 1);
    assert!(batch.sink()[0].starts_with("Delete: "));
}

#[test]
fn test_missing_destination_fails_every_item() {
    let mut batch = processor(RecordingFs::default());
    let mut sel = selection(&["a", "b", "c"]);

    let report = batch.run_batch(&mut sel, BatchKind::Move, None);

    assert_eq!(report.succeeded, 0);
    assert_eq!(report.failed, 3);
    assert!(batch.fs().calls.borrow().is_empty());
    assert_eq!(
        batch.sink(),
        &vec!["Destination path is not provided".to_string(); 3]
    );
}

#[test]
fn test_nonexistent_destination() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nowhere");
    let mut batch = processor(RecordingFs::default());
    let mut sel = selection(&["a", "b"]);

    let count = batch.copy_selected(&mut sel, Some(missing.as_path()));

    assert_eq!(count, 0);
    assert!(batch.fs().calls.borrow().is_empty());
    assert_eq!(
        batch.sink(),
        &vec!["Destination path does not exist".to_string(); 2]
    );
}

#[test]
fn test_destination_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.txt");
    std::fs::write(&file, "x").unwrap();
    let mut batch = processor(RecordingFs::default());
    let mut sel = selection(&["a"]);

    let report = batch.run_batch(&mut sel, BatchKind::Copy, Some(file.as_path()));

    assert_eq!(report.succeeded, 0);
    assert!(batch.fs().calls.borrow().is_empty());
    assert_eq!(batch.sink(), &vec!["Destination path is not a directory".to_string()]);
}

#[test]
fn test_empty_selection_does_nothing() {
    let mut batch = processor(RecordingFs::default());
    let mut sel = Selection::new();

    let report = batch.run_batch(&mut sel, BatchKind::Copy, None);

    assert_eq!(report.total, 0);
    assert_eq!(report.succeeded, 0);
    assert!(batch.fs().calls.borrow().is_empty());
    assert!(batch.sink().is_empty());
}

#[test]
fn test_selection_consumed_once() {
    let dest = TempDir::new().unwrap();
    let mut batch = processor(RecordingFs::default());
    let mut sel = selection(&["a", "b"]);

    assert_eq!(batch.copy_selected(&mut sel, Some(dest.path())), 2);
    assert_eq!(batch.copy_selected(&mut sel, Some(dest.path())), 0);
    assert_eq!(batch.fs().calls.borrow().len(), 2);
}

#[test]
fn test_counts_always_add_up() {
    let dest = TempDir::new().unwrap();
    let names: Vec<String> = (0..50).map(|i| format!("f{i}")).collect();
    let failing: Vec<&str> = names.iter().step_by(3).map(String::as_str).collect();
    let all: Vec<&str> = names.iter().map(String::as_str).collect();

    let mut batch = processor(RecordingFs::failing_on(&failing));
    let mut sel = selection(&all);
    let report = batch.run_batch(&mut sel, BatchKind::Move, Some(dest.path()));

    assert_eq!(report.succeeded + report.failed, 50);
    assert_eq!(report.failed, failing.len());
    assert_eq!(batch.sink().len(), failing.len());
    assert_eq!(batch.fs().calls.borrow().len(), 50);
}
