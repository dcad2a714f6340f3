//! Capability dispatch and the stock resolution contexts

use crate::capability::{DataFetcher, IncludeContext, PathRewriter, StreamFetcher};
use crate::format::Format;
use crate::{Error, Result};
use include_fs::{ResourcePath, io as fs_io};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Which strategy served an include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    Data,
    Stream,
    Filesystem,
}

impl std::fmt::Display for Fetch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Data => "data",
            Self::Stream => "stream",
            Self::Filesystem => "filesystem",
        };
        f.write_str(name)
    }
}

/// Outcome of running a directive name through a context.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Identifier after path rewriting.
    pub path: ResourcePath,
    pub fetch: Fetch,
    pub content: Vec<u8>,
}

/// Resolve `name` against the capabilities of `ctx`.
///
/// The path rewriter is applied first. The data fetcher wins over the stream
/// fetcher, and the filesystem is only used when the context has neither.
/// Streams and files are closed before this returns.
pub fn resolve<C>(ctx: &C, name: &str) -> Result<Resolved>
where
    C: IncludeContext + ?Sized,
{
    let path = match ctx.path_rewriter() {
        Some(rewriter) => ResourcePath::new(rewriter.rewrite_path(name)),
        None => ResourcePath::new(name),
    };

    let (fetch, content) = if let Some(fetcher) = ctx.data_fetcher() {
        let content = fetcher
            .fetch_data(path.as_str())
            .map_err(|e| Error::resolution(name, path.as_str(), e))?;
        (Fetch::Data, content)
    } else if let Some(fetcher) = ctx.stream_fetcher() {
        let content = read_stream(fetcher, path.as_str())
            .map_err(|e| Error::resolution(name, path.as_str(), e))?;
        (Fetch::Stream, content)
    } else {
        let content =
            fs_io::read_bytes(&path).map_err(|e| Error::resolution(name, path.as_str(), e))?;
        (Fetch::Filesystem, content)
    };

    tracing::debug!(
        include = name,
        path = %path,
        fetch = %fetch,
        bytes = content.len(),
        "Resolved include"
    );

    Ok(Resolved {
        path,
        fetch,
        content,
    })
}

fn read_stream(fetcher: &dyn StreamFetcher, name: &str) -> io::Result<Vec<u8>> {
    let mut stream = fetcher.open_stream(name)?;
    let mut content = Vec::new();
    stream.read_to_end(&mut content)?;
    Ok(content)
}

/// Default filesystem context: names are joined onto a root directory.
///
/// `RootResolver::default()` takes the process-wide root from
/// [`include_fs::root_path`] at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootResolver {
    root: PathBuf,
}

impl RootResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for RootResolver {
    fn default() -> Self {
        Self::new(include_fs::root_path())
    }
}

impl PathRewriter for RootResolver {
    fn rewrite_path(&self, name: &str) -> String {
        ResourcePath::under(&self.root, name).as_str().to_string()
    }
}

impl IncludeContext for RootResolver {
    fn path_rewriter(&self) -> Option<&dyn PathRewriter> {
        Some(self)
    }
}

/// Reads whole files relative to a base directory through [`DataFetcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirResolver {
    base: PathBuf,
}

impl DirResolver {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl DataFetcher for DirResolver {
    fn fetch_data(&self, name: &str) -> io::Result<Vec<u8>> {
        fs_io::read_bytes(&ResourcePath::under(&self.base, name))
            .map_err(include_fs::Error::into_io)
    }
}

impl IncludeContext for DirResolver {
    fn data_fetcher(&self) -> Option<&dyn DataFetcher> {
        Some(self)
    }
}

/// Streams files relative to a base directory through [`StreamFetcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderResolver {
    base: PathBuf,
}

impl ReaderResolver {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl StreamFetcher for ReaderResolver {
    fn open_stream(&self, name: &str) -> io::Result<Box<dyn Read + '_>> {
        let file = fs_io::open(&ResourcePath::under(&self.base, name))
            .map_err(include_fs::Error::into_io)?;
        Ok(Box::new(io::BufReader::new(file)))
    }
}

impl IncludeContext for ReaderResolver {
    fn stream_fetcher(&self) -> Option<&dyn StreamFetcher> {
        Some(self)
    }
}

/// Decodes fetched content with the codec named by the resource extension.
///
/// Wraps another context and keeps its capabilities. Only use it where
/// resource names are real file names: `.toml` and `.yaml`/`.yml` select
/// TOML and YAML, everything else stays JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectFormat<C> {
    inner: C,
}

impl<C> DetectFormat<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: IncludeContext> IncludeContext for DetectFormat<C> {
    fn path_rewriter(&self) -> Option<&dyn PathRewriter> {
        self.inner.path_rewriter()
    }

    fn data_fetcher(&self) -> Option<&dyn DataFetcher> {
        self.inner.data_fetcher()
    }

    fn stream_fetcher(&self) -> Option<&dyn StreamFetcher> {
        self.inner.stream_fetcher()
    }

    fn content_format(&self, path: &ResourcePath) -> Format {
        Format::for_resource(path)
    }
}
