//! Single-item filesystem actions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::OpError;

/// Copy, move and delete of one path at a time.
///
/// Each call either fully applies or returns an error for that path alone.
pub trait FileSystemOps {
    /// Copy `source` into the directory `destination`.
    fn copy(&self, source: &Path, destination: &Path) -> Result<(), OpError>;

    /// Move `source` into the directory `destination`.
    fn move_to(&self, source: &Path, destination: &Path) -> Result<(), OpError>;

    /// Delete a file or a whole directory tree.
    fn delete(&self, path: &Path) -> Result<(), OpError>;
}

impl<F: FileSystemOps + ?Sized> FileSystemOps for &F {
    fn copy(&self, source: &Path, destination: &Path) -> Result<(), OpError> {
        (**self).copy(source, destination)
    }

    fn move_to(&self, source: &Path, destination: &Path) -> Result<(), OpError> {
        (**self).move_to(source, destination)
    }

    fn delete(&self, path: &Path) -> Result<(), OpError> {
        (**self).delete(path)
    }
}

/// [`FileSystemOps`] on the local disk.
///
/// Existing targets are handled by the platform (files are overwritten by
/// copy and rename).
#[derive(Debug, Clone, Default)]
pub struct LocalFileSystem {
    /// Whether delete sends items to the trash instead of removing them.
    pub use_trash: bool,
}

impl LocalFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filesystem that deletes to the trash.
    pub fn with_trash() -> Self {
        Self { use_trash: true }
    }
}

impl FileSystemOps for LocalFileSystem {
    fn copy(&self, source: &Path, destination: &Path) -> Result<(), OpError> {
        let target = target_path(source, destination)?;
        let metadata = fs::metadata(source).map_err(|e| OpError::io(source, e))?;

        if metadata.is_dir() {
            copy_dir_recursive(source, &target)
        } else {
            fs::copy(source, &target)
                .map(|_| ())
                .map_err(|e| OpError::io(source, e))
        }
    }

    fn move_to(&self, source: &Path, destination: &Path) -> Result<(), OpError> {
        let target = target_path(source, destination)?;

        match fs::rename(source, &target) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                tracing::debug!(
                    source = %source.display(),
                    target = %target.display(),
                    "rename crosses devices, copying instead"
                );
                self.copy(source, destination)?;
                remove_path(source)
            }
            Err(e) => Err(OpError::io(source, e)),
        }
    }

    fn delete(&self, path: &Path) -> Result<(), OpError> {
        if self.use_trash {
            // Check existence first so a missing path reads the same with or without trash.
            fs::symlink_metadata(path).map_err(|e| OpError::io(path, e))?;
            return trash::delete(path).map_err(|e| OpError::Trash {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
        remove_path(path)
    }
}

/// Where `source` lands inside `destination`, rejecting copies onto itself
/// and into its own subtree.
///
/// Both sides are resolved first, so relative destinations, `..` components
/// and symlinked directories are compared by what they point at. The
/// source's own name is kept unresolved: a symlink is placed, not followed.
fn target_path(source: &Path, destination: &Path) -> Result<PathBuf, OpError> {
    let name = source
        .file_name()
        .ok_or_else(|| OpError::other(format!("{} has no file name", source.display())))?;

    let source_dir = match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let source = fs::canonicalize(source_dir)
        .map_err(|e| OpError::io(source_dir, e))?
        .join(name);
    let target = fs::canonicalize(destination)
        .map_err(|e| OpError::io(destination, e))?
        .join(name);

    if target == source {
        return Err(OpError::SameFile { path: source });
    }
    if target.starts_with(&source) {
        return Err(OpError::IntoItself { path: source });
    }

    Ok(target)
}

/// Remove a file, a symlink or a directory tree. Symlinks are never followed.
fn remove_path(path: &Path) -> Result<(), OpError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| OpError::io(path, e))?;

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| OpError::io(path, e))
}

/// Recursively copy a directory. Symlinks inside it are recreated as links.
fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<(), OpError> {
    fs::create_dir_all(dest).map_err(|e| OpError::io(dest, e))?;

    let entries = fs::read_dir(source).map_err(|e| OpError::io(source, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| OpError::io(source, e))?;
        let path = entry.path();
        let dest_path = dest.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| OpError::io(&path, e))?;

        if file_type.is_symlink() {
            copy_symlink(&path, &dest_path)?;
        } else if file_type.is_dir() {
            copy_dir_recursive(&path, &dest_path)?;
        } else {
            fs::copy(&path, &dest_path).map_err(|e| OpError::io(&path, e))?;
        }
    }

    Ok(())
}

#[cfg(unix)]
fn copy_symlink(link: &Path, dest: &Path) -> Result<(), OpError> {
    let target = fs::read_link(link).map_err(|e| OpError::io(link, e))?;
    std::os::unix::fs::symlink(&target, dest).map_err(|e| OpError::io(dest, e))
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, dest: &Path) -> Result<(), OpError> {
    // Creating links needs extra privileges here; keep file contents, skip directories.
    match fs::metadata(link) {
        Ok(metadata) if metadata.is_file() => fs::copy(link, dest)
            .map(|_| ())
            .map_err(|e| OpError::io(link, e)),
        _ => {
            tracing::warn!(path = %link.display(), "skipped symlink while copying");
            Ok(())
        }
    }
}
