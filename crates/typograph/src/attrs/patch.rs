//! Partial attribute edits.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::key::AttrKey;
use super::set::{normalize_value, AttributeSet};

/// What a patch does to one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchValue {
    /// Replace the key's value.
    Set(String),
    /// Remove the key.
    Clear,
}

impl PatchValue {
    /// The value as it appears in host documents: the new value, or `""` for clear.
    pub fn as_str(&self) -> &str {
        match self {
            PatchValue::Set(v) => v,
            PatchValue::Clear => "",
        }
    }
}

impl From<&str> for PatchValue {
    fn from(value: &str) -> Self {
        PatchValue::from(value.to_string())
    }
}

/// Values are normalized the way [`AttributeSet::set`] stores them, so a
/// blank value means clear.
impl From<String> for PatchValue {
    fn from(value: String) -> Self {
        match normalize_value(value) {
            Some(value) => PatchValue::Set(value),
            None => PatchValue::Clear,
        }
    }
}

impl From<Option<String>> for PatchValue {
    fn from(value: Option<String>) -> Self {
        value.map(PatchValue::from).unwrap_or(PatchValue::Clear)
    }
}

/// A partial edit to an [`AttributeSet`].
///
/// Keys present in the patch are either replaced or cleared; keys absent from
/// the patch are left alone when the patch is applied.
///
/// # Example
///
/// ```rust
/// use typograph::{AttrKey, AttributePatch, PatchValue};
///
/// let patch = AttributePatch::new()
///     .with(AttrKey::FontSize, "16px")
///     .with(AttrKey::Color, "");
///
/// assert_eq!(patch.get(AttrKey::Color), Some(&PatchValue::Clear));
/// assert_eq!(patch.get(AttrKey::LineHeight), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributePatch {
    entries: BTreeMap<AttrKey, PatchValue>,
}

impl AttributePatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a patch that clears every listed key.
    pub fn clear_all(keys: impl IntoIterator<Item = AttrKey>) -> Self {
        Self {
            entries: keys.into_iter().map(|k| (k, PatchValue::Clear)).collect(),
        }
    }

    /// Adds an entry, returning the updated patch for chaining.
    ///
    /// An empty string means "clear this key".
    pub fn with(mut self, key: AttrKey, value: impl Into<PatchValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Adds or replaces an entry. An empty string means "clear this key".
    pub fn set(&mut self, key: AttrKey, value: impl Into<PatchValue>) {
        self.entries.insert(key, value.into());
    }

    /// Returns the entry for a key, if the patch mentions it.
    pub fn get(&self, key: AttrKey) -> Option<&PatchValue> {
        self.entries.get(&key)
    }

    /// Iterates entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (AttrKey, &PatchValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Returns the number of keys the patch mentions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the patch mentions no key.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<AttributeSet> for AttributePatch {
    fn from(set: AttributeSet) -> Self {
        Self::from(&set)
    }
}

impl From<&AttributeSet> for AttributePatch {
    fn from(set: &AttributeSet) -> Self {
        Self {
            entries: set
                .iter()
                .map(|(k, v)| (k, PatchValue::Set(v.to_string())))
                .collect(),
        }
    }
}

impl Serialize for AttributePatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.field_name(), value.as_str())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributePatch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PatchVisitor;

        impl<'de> Visitor<'de> for PatchVisitor {
            type Value = AttributePatch;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of typography attribute edits")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut patch = AttributePatch::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    match AttrKey::from_field_name(&name) {
                        Some(key) => patch.set(key, value),
                        None => {
                            return Err(serde::de::Error::unknown_field(
                                &name,
                                &FIELD_NAMES,
                            ))
                        }
                    }
                }
                Ok(patch)
            }
        }

        deserializer.deserialize_map(PatchVisitor)
    }
}

static FIELD_NAMES: [&str; 12] = [
    AttrKey::Color.field_name(),
    AttrKey::FontSize.field_name(),
    AttrKey::LetterSpacing.field_name(),
    AttrKey::LineHeight.field_name(),
    AttrKey::FontFamily.field_name(),
    AttrKey::MobileFontSize.field_name(),
    AttrKey::MobileLineHeight.field_name(),
    AttrKey::TabletFontSize.field_name(),
    AttrKey::TabletLineHeight.field_name(),
    AttrKey::DesktopFontSize.field_name(),
    AttrKey::DesktopLineHeight.field_name(),
    AttrKey::Variant.field_name(),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_clear() {
        assert_eq!(PatchValue::from(""), PatchValue::Clear);
        assert_eq!(PatchValue::from("red"), PatchValue::Set("red".into()));
        assert_eq!(PatchValue::from(None::<String>), PatchValue::Clear);
    }

    #[test]
    fn test_patch_values_are_normalized() {
        assert_eq!(PatchValue::from("  "), PatchValue::Clear);
        assert_eq!(PatchValue::from(" 16px "), PatchValue::Set("16px".into()));
        assert_eq!(
            PatchValue::from("A; color: red"),
            PatchValue::Set("A color: red".into())
        );
    }

    #[test]
    fn test_clear_all() {
        let patch = AttributePatch::clear_all(AttrKey::RESPONSIVE);
        assert_eq!(patch.len(), 6);
        assert!(patch.iter().all(|(_, v)| *v == PatchValue::Clear));
    }

    #[test]
    fn test_later_entry_wins() {
        let patch = AttributePatch::new()
            .with(AttrKey::Color, "red")
            .with(AttrKey::Color, "blue");
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.get(AttrKey::Color).map(PatchValue::as_str), Some("blue"));
    }

    #[test]
    fn test_from_attribute_set_sets_every_key() {
        let set = AttributeSet::new()
            .with(AttrKey::Color, "red")
            .with(AttrKey::Variant, "Hero");
        let patch = AttributePatch::from(&set);
        assert_eq!(patch.len(), 2);
        assert_eq!(AttributeSet::new().merged(&patch), set);
    }

    #[test]
    fn test_deserialize_patch() {
        let patch: AttributePatch =
            serde_json::from_str(r#"{ "fontSize": "16px", "color": "" }"#).unwrap();
        assert_eq!(
            patch,
            AttributePatch::new()
                .with(AttrKey::FontSize, "16px")
                .with(AttrKey::Color, "")
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        let err = serde_json::from_str::<AttributePatch>(r#"{ "fontWeight": "700" }"#)
            .unwrap_err();
        assert!(err.to_string().contains("fontWeight"));
    }

    #[test]
    fn test_serialize_clear_as_empty_string() {
        let patch = AttributePatch::new().with(AttrKey::Variant, "");
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "variant": "" }));
    }
}
