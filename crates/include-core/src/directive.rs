//! Include directive detection
//!
//! A directive is an object with a non-empty string under [`INCLUDE_KEY`].
//! Anything else, including content that fails to parse, is inline content.
//! Other members next to the key are ignored, so an inline object that has
//! its own `include` string field is read as a directive.

use serde_json::Value;

/// Reserved member name marking a field as an include.
pub const INCLUDE_KEY: &str = "include";

/// A parsed `{"include": "<name>"}` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    include: String,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            include: name.into(),
        }
    }

    /// Name of the resource to include.
    pub fn name(&self) -> &str {
        &self.include
    }

    /// Detect a directive in an already parsed value.
    pub fn parse(value: &Value) -> Option<Self> {
        let name = value.as_object()?.get(INCLUDE_KEY)?.as_str()?;
        if name.is_empty() {
            return None;
        }
        Some(Self::new(name))
    }

    /// Detect a directive in raw document bytes.
    pub fn parse_slice(raw: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(raw).ok()?;
        Self::parse(&value)
    }
}
