//! The decoded, in-memory attribute set of one text run.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::key::AttrKey;
use super::patch::{AttributePatch, PatchValue};

/// Typed typography attributes for a single text run.
///
/// A key is either absent or holds a non-empty string. Values are stored in
/// the form the style-string can carry: `;` is stripped and surrounding
/// whitespace trimmed, and a value that ends up blank removes the key.
/// Iteration always follows the canonical [`AttrKey`] order.
///
/// # Example
///
/// ```rust
/// use typograph::{AttrKey, AttributeSet};
///
/// let mut attrs = AttributeSet::new();
/// attrs.set(AttrKey::FontSize, "16px");
/// attrs.set(AttrKey::Color, "red");
/// attrs.set(AttrKey::Color, " ");
/// attrs.set(AttrKey::FontFamily, " Georgia; ");
///
/// assert_eq!(attrs.get(AttrKey::FontSize), Some("16px"));
/// assert_eq!(attrs.get(AttrKey::FontFamily), Some("Georgia"));
/// assert!(!attrs.contains(AttrKey::Color));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    values: BTreeMap<AttrKey, String>,
}

impl AttributeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key, returning the updated set for chaining.
    pub fn with(mut self, key: AttrKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a key. A value that is blank once normalized removes the key
    /// instead.
    pub fn set(&mut self, key: AttrKey, value: impl Into<String>) {
        match normalize_value(value.into()) {
            Some(value) => {
                self.values.insert(key, value);
            }
            None => {
                self.values.remove(&key);
            }
        }
    }

    /// Removes a key, returning its previous value.
    pub fn remove(&mut self, key: AttrKey) -> Option<String> {
        self.values.remove(&key)
    }

    /// Returns the value for a key, if present.
    pub fn get(&self, key: AttrKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Returns true if the key is present.
    pub fn contains(&self, key: AttrKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Iterates present keys and values in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (AttrKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Returns the number of present keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no key is present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if any per-breakpoint key is present.
    pub fn has_responsive(&self) -> bool {
        AttrKey::RESPONSIVE.iter().any(|k| self.contains(*k))
    }

    /// Returns the applied variant name, if any.
    pub fn variant(&self) -> Option<&str> {
        self.get(AttrKey::Variant)
    }

    /// Merges a partial edit into this set.
    ///
    /// Keys set by the patch are replaced, keys cleared by the patch are
    /// removed, and keys the patch does not mention are left untouched.
    pub fn apply(&mut self, patch: &AttributePatch) {
        for (key, value) in patch.iter() {
            match value {
                PatchValue::Set(v) => self.set(key, v.as_str()),
                PatchValue::Clear => {
                    self.values.remove(&key);
                }
            }
        }
    }

    /// Returns a copy of this set with `patch` merged in.
    pub fn merged(&self, patch: &AttributePatch) -> Self {
        let mut next = self.clone();
        next.apply(patch);
        next
    }
}

/// Brings a value into storable form: `;` removed, then trimmed.
///
/// Returns `None` when nothing is left.
pub(crate) fn normalize_value(value: String) -> Option<String> {
    let value = if value.contains(';') {
        value.replace(';', "")
    } else {
        value
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

impl FromIterator<(AttrKey, String)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (AttrKey, String)>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for (key, value) in iter {
            set.set(key, value);
        }
        set
    }
}

impl Serialize for AttributeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key.field_name(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = AttributeSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of typography attributes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut set = AttributeSet::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    // Unrecognized fields are dropped, same as the style-string decoder.
                    if let Some(key) = AttrKey::from_field_name(&name) {
                        set.set(key, value);
                    }
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(SetVisitor)
    }
}
