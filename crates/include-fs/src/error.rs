//! Error types for include-fs

use std::path::PathBuf;

/// Result type for include-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in include-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The path the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }

    /// Kind of the underlying I/O failure.
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
        }
    }

    /// Unwrap into the underlying I/O error, dropping the path.
    pub fn into_io(self) -> std::io::Error {
        match self {
            Self::Io { source, .. } => source,
        }
    }
}
