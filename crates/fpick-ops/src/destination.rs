//! Destination directory checks.

use std::fs;
use std::path::Path;

use fpick_core::{DestinationError, ErrorSink};

/// Check that `destination` is provided, exists and is a directory, in
/// that order.
///
/// The filesystem is consulted on every call; nothing is cached.
pub fn validate_destination(destination: Option<&Path>) -> Result<&Path, DestinationError> {
    let Some(destination) = destination.filter(|d| !d.as_os_str().is_empty()) else {
        return Err(DestinationError::NotProvided);
    };

    match fs::metadata(destination) {
        Err(_) => Err(DestinationError::DoesNotExist {
            path: destination.to_path_buf(),
        }),
        Ok(metadata) if !metadata.is_dir() => Err(DestinationError::NotADirectory {
            path: destination.to_path_buf(),
        }),
        Ok(_) => Ok(destination),
    }
}

/// Boolean form of [`validate_destination`] that reports the failure to
/// `sink`.
pub fn is_valid_destination(destination: Option<&Path>, sink: &mut dyn ErrorSink) -> bool {
    match validate_destination(destination) {
        Ok(_) => true,
        Err(e) => {
            sink.report_error(&e.to_string());
            false
        }
    }
}
