//! Process-wide default root for filesystem includes.
//!
//! The root is read once when a root-aware resolver is constructed, so it
//! should be set before decoding starts. Changing it while other threads are
//! decoding is memory-safe but makes it unspecified which root those decodes
//! observe.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

static ROOT_PATH: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Set the default root prefixed to every default-strategy resource name.
pub fn set_root_path(path: impl AsRef<Path>) {
    let path = path.as_ref().to_path_buf();
    tracing::debug!(root = %path.display(), "Setting default include root");
    let mut guard = ROOT_PATH.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(path);
}

/// Current default root. Empty until [`set_root_path`] is called.
pub fn root_path() -> PathBuf {
    let guard = ROOT_PATH.read().unwrap_or_else(|e| e.into_inner());
    guard.clone().unwrap_or_default()
}
