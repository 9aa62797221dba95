//! Style-string decoding.

use crate::attrs::{AttrKey, AttributeSet};

/// Decodes a flat style-string into an [`AttributeSet`].
///
/// The string is scanned once, declaration by declaration. A declaration is
/// recognized when its property name is one of the [`AttrKey`] properties;
/// the value runs to the next `;` (or the end of the string) and is trimmed
/// but otherwise kept verbatim. If a property appears more than once, the
/// first occurrence wins. Unrecognized properties and empty values are
/// dropped.
///
/// # Example
///
/// ```rust
/// use typograph::{decode, AttrKey};
///
/// let attrs = decode("color: red; font-weight: 700; --mobile-font-size: 24px;");
/// assert_eq!(attrs.get(AttrKey::Color), Some("red"));
/// assert_eq!(attrs.get(AttrKey::MobileFontSize), Some("24px"));
/// assert_eq!(attrs.len(), 2);
/// ```
pub fn decode(style: &str) -> AttributeSet {
    let mut attrs = AttributeSet::new();
    for (property, value) in declarations(style) {
        let Some(key) = AttrKey::from_property(property) else {
            continue;
        };
        if !attrs.contains(key) {
            attrs.set(key, value);
        }
    }
    tracing::trace!(properties = attrs.len(), "decoded style string");
    attrs
}

/// Returns the decoded value of one property, as the host's "current value
/// for the active selection" query.
///
/// # Example
///
/// ```rust
/// use typograph::{current_value, AttrKey};
///
/// let style = "font-size: 16px; data-variant: Hero;";
/// assert_eq!(current_value(style, AttrKey::Variant).as_deref(), Some("Hero"));
/// assert_eq!(current_value(style, AttrKey::Color), None);
/// ```
pub fn current_value(style: &str, key: AttrKey) -> Option<String> {
    declarations(style)
        .find(|(property, value)| *property == key.property() && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// Splits a style-string into trimmed `(property, value)` pairs.
///
/// Segments without a `:` are skipped.
fn declarations(style: &str) -> impl Iterator<Item = (&str, &str)> {
    style.split(';').filter_map(|segment| {
        let (property, value) = segment.split_once(':')?;
        Some((property.trim(), value.trim()))
    })
}
