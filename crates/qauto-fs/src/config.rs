//! Format-agnostic record loading and saving

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// Formats the store understands, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Detect the format of a path from its extension.
    pub fn detect(path: &NormalizedPath) -> Option<Self> {
        match path.extension()?.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Format-agnostic record store.
///
/// Detects the format from the file extension and handles
/// serialization/deserialization transparently:
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Whether `path` has an extension this store can read.
    pub fn supports(&self, path: &NormalizedPath) -> bool {
        Format::detect(path).is_some()
    }

    /// Load a record from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = self.format_of(path)?;
        let content = io::read_text(path)?;
        self.parse(path, format, &content)
    }

    /// Parse already-read content as if it came from `path`.
    pub fn parse<T: DeserializeOwned>(
        &self,
        path: &NormalizedPath,
        format: Format,
        content: &str,
    ) -> Result<T> {
        let parse_err = |message: String| Error::ConfigParse {
            path: path.to_native(),
            format: format.label().into(),
            message,
        };

        match format {
            Format::Toml => toml::from_str(content).map_err(|e| parse_err(e.to_string())),
            Format::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string())),
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string())),
        }
    }

    /// Save a record to a file, atomically.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let format = self.format_of(path)?;
        let serialize_err = |message: String| Error::ConfigSerialize {
            path: path.to_native(),
            format: format.label().into(),
            message,
        };

        let content = match format {
            Format::Toml => {
                toml::to_string_pretty(value).map_err(|e| serialize_err(e.to_string()))?
            }
            Format::Json => {
                serde_json::to_string_pretty(value).map_err(|e| serialize_err(e.to_string()))?
            }
            Format::Yaml => serde_yaml::to_string(value).map_err(|e| serialize_err(e.to_string()))?,
        };

        io::write_text(path, &content)
    }

    fn format_of(&self, path: &NormalizedPath) -> Result<Format> {
        Format::detect(path).ok_or_else(|| Error::UnsupportedFormat {
            extension: path.extension().unwrap_or("").to_string(),
        })
    }
}
