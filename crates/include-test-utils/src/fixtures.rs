//! [`Fixtures`] builder for include resolution scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A struct document, `{"name":"Sphinx","age":1}`.
pub const STRUCT_JSON: &str = r#"{"name":"Sphinx","age":1}"#;

/// A temporary directory of include targets.
///
/// # Example
///
/// ```rust,no_run
/// use include_test_utils::Fixtures;
///
/// let fixtures = Fixtures::standard();
/// assert!(fixtures.path("struct.json").exists());
/// ```
pub struct Fixtures {
    temp_dir: TempDir,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixtures {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a directory holding the standard resources:
    ///
    /// - `string.json`: `"Sphinx"`
    /// - `int.json`: `123`
    /// - `struct.json`, `struct.toml`, `struct.yaml`: name Sphinx, age 1
    /// - `array.json`: a one-element array of the struct
    /// - `nested/deep.json`: the struct, one directory down
    pub fn standard() -> Self {
        let fixtures = Self::new();
        fixtures.write("string.json", r#""Sphinx""#);
        fixtures.write("int.json", "123");
        fixtures.write("struct.json", STRUCT_JSON);
        fixtures.write("struct.toml", "name = \"Sphinx\"\nage = 1\n");
        fixtures.write("struct.yaml", "name: Sphinx\nage: 1\n");
        fixtures.write("array.json", &format!("[{STRUCT_JSON}]"));
        fixtures.write("nested/deep.json", STRUCT_JSON);
        fixtures
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` under the root.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `content` to `name`, creating parent directories.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("Could not create {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
        path
    }
}
