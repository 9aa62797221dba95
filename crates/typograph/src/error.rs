//! Configuration errors.
//!
//! The codec, resolver and renderer are total and never fail. Errors only
//! arise while loading and validating the host's static configuration.

use std::path::PathBuf;

/// Error returned when loading or validating configuration fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML or does not match the expected shape.
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not valid JSON or does not match the expected shape.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not name a supported format.
    #[error("unsupported configuration format for '{}' (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Two variants share a name; only the first would ever resolve.
    #[error("duplicate variant name '{name}'")]
    DuplicateVariant { name: String },

    /// A variant has an empty name and could never be selected.
    #[error("variant at index {index} has an empty name")]
    EmptyVariantName { index: usize },

    /// A variant name would not survive storage in a style-string.
    #[error("variant name '{name}' contains ';' or surrounding whitespace")]
    InvalidVariantName { name: String },
}
