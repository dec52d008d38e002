//! Error types for scanning operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a scan.
///
/// The walker does not skip over inaccessible entries: the first failure
/// ends the whole run and is reported as one of these.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Convert a directory walk failure, keeping the path it happened at.
    pub fn walk(root: impl Into<PathBuf>, error: walkdir::Error) -> Self {
        let path = error.path().map_or_else(|| root.into(), PathBuf::from);
        match error.into_io_error() {
            Some(source) => Self::io(path, source),
            None => Self::Io {
                source: std::io::Error::other("filesystem loop detected"),
                path,
            },
        }
    }

    /// Whether the failure was a permission problem.
    #[must_use]
    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
