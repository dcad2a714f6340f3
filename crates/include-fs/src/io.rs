//! Read helpers for the filesystem fallback

use crate::{Error, ResourcePath, Result};
use std::fs::File;
use std::io::Read;

/// Read the full content of the file named by `path`.
///
/// The file handle is closed before returning, on success and on error.
pub fn read_bytes(path: &ResourcePath) -> Result<Vec<u8>> {
    let native_path = path.to_native();
    let mut file = File::open(&native_path).map_err(|e| Error::io(&native_path, e))?;

    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|e| Error::io(&native_path, e))?;

    tracing::trace!(path = %path, bytes = content.len(), "Read include file");
    Ok(content)
}

/// Open the file named by `path` for streaming reads.
pub fn open(path: &ResourcePath) -> Result<File> {
    let native_path = path.to_native();
    File::open(&native_path).map_err(|e| Error::io(&native_path, e))
}
