//! Error types for opening the walk root.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported when the walk root cannot be opened.
///
/// Failures after the walk has started (a subdirectory deleted or made
/// unreadable mid-walk) are not errors; the walker skips those directories
/// instead.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot access '{}': Permission denied", .0.display())]
    PermissionDenied(PathBuf),

    #[error("cannot access '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}
