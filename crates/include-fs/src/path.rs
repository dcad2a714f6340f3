//! Resource identifiers as seen by the filesystem fallback

use std::path::{Component, Path, PathBuf};

/// Effective identifier of an included resource.
///
/// Holds the name exactly as produced by the directive or a path rewriter.
/// Only [`ResourcePath::under`] alters it, by prefixing a root directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    inner: String,
}

impl ResourcePath {
    pub fn new(name: impl Into<String>) -> Self {
        Self { inner: name.into() }
    }

    /// Join `name` onto `root`.
    ///
    /// An empty root leaves the name unchanged. Otherwise the root always
    /// stays in front: leading separators and drive prefixes of `name` are
    /// dropped before joining.
    pub fn under(root: impl AsRef<Path>, name: &str) -> Self {
        let root = root.as_ref();
        if root.as_os_str().is_empty() {
            return Self::new(name);
        }
        let relative: PathBuf = Path::new(name)
            .components()
            .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
            .collect();
        Self::new(root.join(relative).to_string_lossy().into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Last component of the identifier, ignoring trailing separators.
    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .trim_end_matches(['/', '\\'])
            .rsplit(['/', '\\'])
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Extension of the last component. Dotfiles have none.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }
}

impl AsRef<Path> for ResourcePath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for ResourcePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ResourcePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
