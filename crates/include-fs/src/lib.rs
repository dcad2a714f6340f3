//! Filesystem side of include resolution
//!
//! Provides resource path construction, the process-wide default root,
//! and the read helpers used when no fetch capability is available.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::{root_path, set_root_path};
pub use error::{Error, Result};
pub use path::ResourcePath;
