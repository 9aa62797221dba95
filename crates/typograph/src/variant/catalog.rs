//! Ordered collection of variant definitions.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::attrs::AttributePatch;
use crate::config::{load_file, ConfigFormat};
use crate::error::ConfigError;

use super::definition::VariantDefinition;
use super::resolve::resolve;

/// The variants a host configured, in definition order.
///
/// Built once at startup and read-only afterwards. Loading from a document
/// validates names; constructing with [`VariantCatalog::new`] does not, since
/// resolution tolerates duplicates (the first one wins).
///
/// # Example
///
/// ```rust
/// use typograph::VariantCatalog;
///
/// let catalog = VariantCatalog::from_yaml_str(r#"
/// variants:
///   - name: Hero
///     mobile: { fontSize: 24px, lineHeight: "1.2" }
///     tablet: { fontSize: 32px, lineHeight: "1.15" }
///     desktop: { fontSize: 48px, lineHeight: "1.1" }
/// "#).unwrap();
///
/// assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Hero"]);
/// assert!(!catalog.resolve("Hero").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantCatalog {
    variants: Vec<VariantDefinition>,
}

/// Accepted document shapes: a bare list, or an object with a `variants` list.
#[derive(Deserialize)]
#[serde(untagged)]
enum VariantDocument {
    List(Vec<VariantDefinition>),
    Wrapped { variants: Vec<VariantDefinition> },
}

impl VariantDocument {
    fn into_variants(self) -> Vec<VariantDefinition> {
        match self {
            VariantDocument::List(variants) | VariantDocument::Wrapped { variants } => variants,
        }
    }
}

impl VariantCatalog {
    /// Creates a catalog without validating it.
    pub fn new(variants: Vec<VariantDefinition>) -> Self {
        Self { variants }
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Self::parse(ConfigFormat::Yaml, source)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Self::parse(ConfigFormat::Json, source)
    }

    /// Loads and validates a `.yaml`, `.yml` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let document: VariantDocument = load_file(path.as_ref())?;
        Self::validated(document.into_variants())
    }

    fn parse(format: ConfigFormat, source: &str) -> Result<Self, ConfigError> {
        let document: VariantDocument = format.parse(source)?;
        Self::validated(document.into_variants())
    }

    fn validated(variants: Vec<VariantDefinition>) -> Result<Self, ConfigError> {
        let catalog = Self::new(variants);
        catalog.validate()?;
        tracing::debug!(variants = catalog.len(), "loaded variant catalog");
        Ok(catalog)
    }

    /// Checks for empty, duplicate and unstorable names.
    ///
    /// A name is unstorable when it contains `;` or has surrounding
    /// whitespace, since the stored `data-variant` would no longer match it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, variant) in self.variants.iter().enumerate() {
            let name = variant.name.as_str();
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyVariantName { index });
            }
            if name.contains(';') || name.trim() != name {
                return Err(ConfigError::InvalidVariantName {
                    name: variant.name.clone(),
                });
            }
            if !seen.insert(variant.name.as_str()) {
                return Err(ConfigError::DuplicateVariant {
                    name: variant.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Looks up a variant by exact name. The first match wins.
    pub fn get(&self, name: &str) -> Option<&VariantDefinition> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Resolves a name into a patch; unknown names produce the clear signal.
    pub fn resolve(&self, name: &str) -> AttributePatch {
        resolve(&self.variants, name)
    }

    /// Variant names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.name.as_str())
    }

    /// Iterates the definitions in order.
    pub fn iter(&self) -> impl Iterator<Item = &VariantDefinition> {
        self.variants.iter()
    }

    /// The definitions as a slice.
    pub fn as_slice(&self) -> &[VariantDefinition] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl From<Vec<VariantDefinition>> for VariantCatalog {
    fn from(variants: Vec<VariantDefinition>) -> Self {
        Self::new(variants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::{AttrKey, PatchValue};
    use crate::variant::{clear_patch, DeviceSettings};

    const YAML: &str = r##"
- name: Hero
  mobile: { fontSize: 24px, lineHeight: "1.2" }
  tablet: { fontSize: 32px, lineHeight: "1.15" }
  desktop: { fontSize: 48px, lineHeight: "1.1", color: "#111" }
- name: Caption
  mobile: { fontSize: 12px, lineHeight: "1.4" }
  tablet: { fontSize: 12px, lineHeight: "1.4" }
  desktop: { fontSize: 13px, lineHeight: "1.4" }
"##;

    fn device() -> DeviceSettings {
        DeviceSettings::new("16px", "1.5")
    }

    #[test]
    fn test_from_yaml_list() {
        let catalog = VariantCatalog::from_yaml_str(YAML).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Hero", "Caption"]);
        assert_eq!(
            catalog.get("Hero").and_then(|v| v.desktop.color.as_deref()),
            Some("#111")
        );
    }

    #[test]
    fn test_from_json_wrapped() {
        let json = r#"{ "variants": [ {
            "name": "Body",
            "mobile": { "fontSize": "14px", "lineHeight": "1.5" },
            "tablet": { "fontSize": "15px", "lineHeight": "1.5" },
            "desktop": { "fontSize": "16px", "lineHeight": "1.6" }
        } ] }"#;
        let catalog = VariantCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Body"]);
    }

    #[test]
    fn test_invalid_document() {
        assert!(matches!(
            VariantCatalog::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            VariantCatalog::from_yaml_str("- name: OnlyName"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_validate_duplicate() {
        let catalog = VariantCatalog::new(vec![
            VariantDefinition::new("A", device(), device(), device()),
            VariantDefinition::new("A", device(), device(), device()),
        ]);
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::DuplicateVariant { name }) if name == "A"
        ));
    }

    #[test]
    fn test_validate_empty_name() {
        let catalog = VariantCatalog::new(vec![
            VariantDefinition::new("A", device(), device(), device()),
            VariantDefinition::new("", device(), device(), device()),
        ]);
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::EmptyVariantName { index: 1 })
        ));
    }

    #[test]
    fn test_validate_rejects_unstorable_names() {
        for name in ["A; color: red", " Hero", "Hero\t"] {
            let catalog =
                VariantCatalog::new(vec![VariantDefinition::new(name, device(), device(), device())]);
            assert!(matches!(
                catalog.validate(),
                Err(ConfigError::InvalidVariantName { .. })
            ));
        }
    }

    #[test]
    fn test_validate_blank_name_is_empty() {
        let catalog =
            VariantCatalog::new(vec![VariantDefinition::new("  ", device(), device(), device())]);
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::EmptyVariantName { index: 0 })
        ));
    }

    #[test]
    fn test_resolve_through_catalog() {
        let catalog = VariantCatalog::from_yaml_str(YAML).unwrap();
        let patch = catalog.resolve("Caption");
        assert_eq!(patch.get(AttrKey::FontSize).map(PatchValue::as_str), Some("13px"));
        assert_eq!(catalog.resolve("Nope"), clear_patch());
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.yml");
        std::fs::write(&path, YAML).unwrap();
        let catalog = VariantCatalog::from_path(&path).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = VariantCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.resolve("Hero"), clear_patch());
    }
}
