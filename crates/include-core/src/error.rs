//! Error types for include-core

use crate::format::Format;

/// Result type for include-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed cause carried by resolution and content errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while decoding or encoding an include field
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Inline content did not decode into the target type.
    #[error(transparent)]
    Inline(serde_json::Error),

    #[error("Failed to resolve include '{name}' at {path}: {source}")]
    Resolution {
        name: String,
        path: String,
        #[source]
        source: BoxError,
    },

    #[error("Included content '{name}' is not valid {format}: {source}")]
    ContentInvalid {
        name: String,
        format: Format,
        #[source]
        source: BoxError,
    },

    #[error("Failed to serialize value: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl Error {
    pub fn resolution(
        name: impl Into<String>,
        path: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Resolution {
            name: name.into(),
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn content_invalid(name: impl Into<String>, format: Format, source: BoxError) -> Self {
        Self::ContentInvalid {
            name: name.into(),
            format,
            source,
        }
    }

    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution { .. })
    }

    pub fn is_content_invalid(&self) -> bool {
        matches!(self, Self::ContentInvalid { .. })
    }

    /// Kind of the I/O failure behind a resolution error, if it was one.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        let Self::Resolution { source, .. } = self else {
            return None;
        };
        if let Some(io) = source.downcast_ref::<std::io::Error>() {
            return Some(io.kind());
        }
        source
            .downcast_ref::<include_fs::Error>()
            .map(include_fs::Error::kind)
    }
}
