//! Lazy depth-first directory walker.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::WalkError;

/// One directory visited during a walk: its path plus the names of its
/// immediate subdirectories and immediate files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalStep {
    pub path: PathBuf,
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

impl TraversalStep {
    /// Full paths of the immediate subdirectories, in listing order.
    pub fn dir_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.dirs.iter().map(|name| self.path.join(name))
    }

    /// Full paths of the immediate files, in listing order.
    pub fn file_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|name| self.path.join(name))
    }
}

/// Depth-first iterator over every directory reachable from a root.
///
/// Each call to `next` lists one directory and yields a [`TraversalStep`]
/// for it. Directories are visited exactly once; entries within a directory
/// come back in whatever order the filesystem reports them. A symlink to a
/// directory is listed among the subdirectories but never descended into, so
/// cyclic symlink graphs terminate. A directory that becomes unreadable
/// mid-walk still appears as a subfolder of its parent but yields no step of
/// its own.
pub struct Walk {
    pending: Vec<PathBuf>,
}

impl Walk {
    /// Validate `root` and build a walker over it.
    ///
    /// Returns [`WalkError::RootNotFound`] if the root does not exist and
    /// [`WalkError::NotADirectory`] if it exists but is not a directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, WalkError> {
        let root = root.into();
        let meta = fs::metadata(&root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => WalkError::RootNotFound(root.clone()),
            io::ErrorKind::PermissionDenied => WalkError::PermissionDenied(root.clone()),
            _ => WalkError::Io {
                path: root.clone(),
                source: e,
            },
        })?;

        if !meta.is_dir() {
            return Err(WalkError::NotADirectory(root));
        }

        Ok(Self {
            pending: vec![root],
        })
    }
}

impl Iterator for Walk {
    type Item = TraversalStep;

    fn next(&mut self) -> Option<TraversalStep> {
        while let Some(dir) = self.pending.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(_) => continue, // unreadable or deleted mid-walk
            };

            let mut dirs = Vec::new();
            let mut files = Vec::new();
            let mut descend = Vec::new();

            for entry in entries.flatten() {
                let name = entry.file_name().to_string_lossy().to_string();
                let file_type = match entry.file_type() {
                    Ok(t) => t,
                    Err(_) => {
                        files.push(name);
                        continue;
                    }
                };

                if file_type.is_dir() {
                    descend.push(entry.path());
                    dirs.push(name);
                } else if file_type.is_symlink() && entry.path().is_dir() {
                    // Listed as a subdirectory, never entered
                    dirs.push(name);
                } else {
                    files.push(name);
                }
            }

            // Reversed so the next step visits the first-listed subdirectory
            self.pending.extend(descend.into_iter().rev());

            return Some(TraversalStep { path: dir, dirs, files });
        }

        None
    }
}
