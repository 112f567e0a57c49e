//! Per-item failure records.
//!
//! The engine never aborts on an individual directory or file; each miss is
//! captured here in encounter order and summarized after the walk finishes.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// What the engine was doing when an item failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Creating the mirrored directory under the destination root.
    MirrorDir,
    /// Copying one file's content and metadata.
    CopyFile,
    /// Advancing the traversal itself.
    Traversal,
}

/// One recorded failure. `permission_denied` is captured from the
/// underlying `io::ErrorKind` at record time so reporting layers never
/// have to sniff message strings.
#[derive(Debug, Clone)]
pub struct Failure {
    pub kind: FailureKind,
    pub path: PathBuf,
    pub message: String,
    pub permission_denied: bool,
}

impl Failure {
    pub fn from_io(kind: FailureKind, path: impl Into<PathBuf>, err: &io::Error) -> Self {
        Self {
            kind,
            path: path.into(),
            message: err.to_string(),
            permission_denied: err.kind() == io::ErrorKind::PermissionDenied,
        }
    }

    /// Record a walk error. The offending path comes from the error itself
    /// when known, otherwise `fallback` (the walk root).
    pub fn traversal(err: &walkdir::Error, fallback: &Path) -> Self {
        Self {
            kind: FailureKind::Traversal,
            path: err.path().unwrap_or(fallback).to_path_buf(),
            message: err.to_string(),
            permission_denied: err
                .io_error()
                .map(|io_err| io_err.kind() == io::ErrorKind::PermissionDenied)
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::MirrorDir => {
                write!(f, "Cannot create directory {}: {}", self.path.display(), self.message)
            }
            FailureKind::CopyFile => {
                write!(f, "Cannot copy {}: {}", self.path.display(), self.message)
            }
            FailureKind::Traversal => {
                write!(f, "Error processing {}: {}", self.path.display(), self.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denials_are_flagged() {
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let failure = Failure::from_io(FailureKind::CopyFile, "/tree/file.txt", &denied);
        assert!(failure.permission_denied);

        let missing = io::Error::new(io::ErrorKind::NotFound, "missing");
        let failure = Failure::from_io(FailureKind::CopyFile, "/tree/file.txt", &missing);
        assert!(!failure.permission_denied);
    }

    #[test]
    fn display_names_the_operation() {
        let err = io::Error::new(io::ErrorKind::Other, "disk on fire");
        let failure = Failure::from_io(FailureKind::MirrorDir, "/dest/sub", &err);
        assert_eq!(
            failure.to_string(),
            "Cannot create directory /dest/sub: disk on fire"
        );

        let failure = Failure::from_io(FailureKind::CopyFile, "/src/a.txt", &err);
        assert!(failure.to_string().starts_with("Cannot copy /src/a.txt:"));
    }

    #[test]
    fn traversal_record_carries_the_errored_path() {
        let err = walkdir::WalkDir::new("/definitely/not/a/real/path")
            .into_iter()
            .next()
            .unwrap()
            .unwrap_err();
        let failure = Failure::traversal(&err, Path::new("/fallback"));
        assert_eq!(failure.kind, FailureKind::Traversal);
        assert_eq!(failure.path, Path::new("/definitely/not/a/real/path"));
    }
}
