//! Loading configuration documents from YAML or JSON.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ConfigError;

/// Supported configuration document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension (`.yaml`, `.yml`, `.json`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    /// Parses a document in this format.
    pub fn parse<T: DeserializeOwned>(self, source: &str) -> Result<T, ConfigError> {
        match self {
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(source)?),
            ConfigFormat::Json => Ok(serde_json::from_str(source)?),
        }
    }
}

/// Reads and parses a configuration file, choosing the format by extension.
pub(crate) fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?format, "loading configuration");
    format.parse(&source)
}
