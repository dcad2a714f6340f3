//! Codecs for included content

use crate::error::BoxError;
use include_fs::ResourcePath;
use serde::de::DeserializeOwned;

/// Document codec used to decode fetched content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Json,
    Toml,
    Yaml,
}

impl Format {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Format for a resolved resource, falling back to JSON.
    pub fn for_resource(path: &ResourcePath) -> Self {
        path.extension()
            .and_then(Self::from_extension)
            .unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        }
    }

    /// Decode a complete document. Trailing data is an error.
    pub fn decode<T: DeserializeOwned>(&self, content: &[u8]) -> Result<T, BoxError> {
        match self {
            Self::Json => Ok(serde_json::from_slice(content)?),
            Self::Toml => {
                let text = std::str::from_utf8(content)?;
                Ok(toml::from_str(text)?)
            }
            Self::Yaml => Ok(serde_yaml::from_slice(content)?),
        }
    }

    /// Decode the first JSON value of a stream, ignoring what follows it.
    /// Other formats have no value boundary and decode the whole content.
    pub fn decode_leading<T: DeserializeOwned>(&self, content: &[u8]) -> Result<T, BoxError> {
        match self {
            Self::Json => {
                let mut de = serde_json::Deserializer::from_slice(content);
                Ok(serde::Deserialize::deserialize(&mut de)?)
            }
            _ => self.decode(content),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
