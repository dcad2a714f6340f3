//! Resolution capabilities a context may provide
//!
//! A context is probed in a fixed order when a directive is found:
//!
//! 1. [`PathRewriter`] maps the directive name to the identifier used for
//!    fetching. Without one the name is used unchanged.
//! 2. [`DataFetcher`] returns the whole resource at once.
//! 3. [`StreamFetcher`] is used only when there is no data fetcher.
//! 4. With neither fetcher the identifier is opened as a local file.
//!
//! Contexts opt in by overriding the matching accessor on
//! [`IncludeContext`]; the defaults report no capability. Fetched content
//! is JSON unless the context picks another [`Format`].

use crate::format::Format;
use include_fs::ResourcePath;
use std::io::{self, Read};
use std::sync::Arc;

/// Translates a logical include name into a backend location.
pub trait PathRewriter {
    fn rewrite_path(&self, name: &str) -> String;
}

/// Fetches the complete content of a named resource.
pub trait DataFetcher {
    fn fetch_data(&self, name: &str) -> io::Result<Vec<u8>>;
}

/// Opens a named resource as a byte stream.
///
/// The stream is read to the end and dropped before decoding returns.
pub trait StreamFetcher {
    fn open_stream(&self, name: &str) -> io::Result<Box<dyn Read + '_>>;
}

impl<F> PathRewriter for F
where
    F: Fn(&str) -> String,
{
    fn rewrite_path(&self, name: &str) -> String {
        self(name)
    }
}

impl<F> DataFetcher for F
where
    F: Fn(&str) -> io::Result<Vec<u8>>,
{
    fn fetch_data(&self, name: &str) -> io::Result<Vec<u8>> {
        self(name)
    }
}

/// A resolution context, probed for capabilities at decode time.
///
/// The context is never serialized.
pub trait IncludeContext {
    fn path_rewriter(&self) -> Option<&dyn PathRewriter> {
        None
    }

    fn data_fetcher(&self) -> Option<&dyn DataFetcher> {
        None
    }

    fn stream_fetcher(&self) -> Option<&dyn StreamFetcher> {
        None
    }

    /// Codec for content fetched from `path`.
    fn content_format(&self, _path: &ResourcePath) -> Format {
        Format::Json
    }
}

/// No capabilities: names are opened as given, relative to the working directory.
impl IncludeContext for () {}

impl<C: IncludeContext + ?Sized> IncludeContext for &C {
    fn path_rewriter(&self) -> Option<&dyn PathRewriter> {
        (**self).path_rewriter()
    }

    fn data_fetcher(&self) -> Option<&dyn DataFetcher> {
        (**self).data_fetcher()
    }

    fn stream_fetcher(&self) -> Option<&dyn StreamFetcher> {
        (**self).stream_fetcher()
    }

    fn content_format(&self, path: &ResourcePath) -> Format {
        (**self).content_format(path)
    }
}

impl<C: IncludeContext + ?Sized> IncludeContext for Box<C> {
    fn path_rewriter(&self) -> Option<&dyn PathRewriter> {
        (**self).path_rewriter()
    }

    fn data_fetcher(&self) -> Option<&dyn DataFetcher> {
        (**self).data_fetcher()
    }

    fn stream_fetcher(&self) -> Option<&dyn StreamFetcher> {
        (**self).stream_fetcher()
    }

    fn content_format(&self, path: &ResourcePath) -> Format {
        (**self).content_format(path)
    }
}

impl<C: IncludeContext + ?Sized> IncludeContext for Arc<C> {
    fn path_rewriter(&self) -> Option<&dyn PathRewriter> {
        (**self).path_rewriter()
    }

    fn data_fetcher(&self) -> Option<&dyn DataFetcher> {
        (**self).data_fetcher()
    }

    fn stream_fetcher(&self) -> Option<&dyn StreamFetcher> {
        (**self).stream_fetcher()
    }

    fn content_format(&self, path: &ResourcePath) -> Format {
        (**self).content_format(path)
    }
}
