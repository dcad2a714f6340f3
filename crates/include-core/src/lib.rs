//! Include-by-reference resolution for serde documents
//!
//! A field wrapped in [`Wrapper`] accepts either its value inline or a
//! directive such as `{"include": "struct.json"}`. Directives are resolved
//! through the capabilities of the wrapper's context and the fetched content
//! is decoded in place of the directive. Serialization always writes the
//! resolved value inline.
//!
//! ```rust,no_run
//! use include_core::Include;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Settings {
//!     banner: Include<String>,
//! }
//!
//! include_core::set_root_path("./testdata");
//! let settings: Settings =
//!     serde_json::from_str(r#"{"banner": {"include": "string.json"}}"#).unwrap();
//! assert_eq!(settings.banner.value(), "Sphinx");
//! ```

pub mod capability;
pub mod directive;
pub mod error;
pub mod format;
pub mod resolver;
pub mod wrapper;

pub use capability::{DataFetcher, IncludeContext, PathRewriter, StreamFetcher};
pub use directive::{Directive, INCLUDE_KEY};
pub use error::{BoxError, Error, Result};
pub use format::Format;
pub use include_fs::{ResourcePath, root_path, set_root_path};
pub use resolver::{
    DetectFormat, DirResolver, Fetch, ReaderResolver, Resolved, RootResolver, resolve,
};
pub use wrapper::{Include, IncludeSeed, SelfInclude, Wrapper};
