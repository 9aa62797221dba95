//! Style-string encoding.

use crate::attrs::{AttributePatch, AttributeSet};

use super::decode::decode;

/// Merges `patch` into an existing style-string.
///
/// For every key in the patch, a non-empty value replaces any prior value and
/// an empty value removes the key. Keys the patch does not mention keep their
/// prior value. The result is re-serialized canonically (see [`encode_set`]),
/// so encoding the same patch twice yields the same string.
///
/// Properties of `existing` that the codec does not recognize are not carried
/// over.
///
/// # Example
///
/// ```rust
/// use typograph::{encode, AttrKey, AttributePatch};
///
/// let patch = AttributePatch::new().with(AttrKey::FontSize, "16px");
/// let style = encode("color: red; font-size: 12px;", &patch);
/// assert_eq!(style, "color: red; font-size: 16px;");
///
/// let cleared = encode(&style, &AttributePatch::new().with(AttrKey::Color, ""));
/// assert_eq!(cleared, "font-size: 16px;");
/// ```
pub fn encode(existing: &str, patch: &AttributePatch) -> String {
    let attrs = decode(existing).merged(patch);
    tracing::trace!(
        edits = patch.len(),
        properties = attrs.len(),
        "encoded style patch"
    );
    encode_set(&attrs)
}

/// Serializes an [`AttributeSet`] into a flat style-string.
///
/// Declarations follow canonical key order, each written as
/// `property: value;` and separated by a single space. The empty set encodes
/// to the empty string.
pub fn encode_set(attrs: &AttributeSet) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!("{}: {};", key.property(), value))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::AttrKey;

    #[test]
    fn test_encode_set_canonical_order() {
        let attrs = AttributeSet::new()
            .with(AttrKey::Variant, "Hero")
            .with(AttrKey::FontSize, "48px")
            .with(AttrKey::MobileFontSize, "24px");
        assert_eq!(
            encode_set(&attrs),
            "font-size: 48px; --mobile-font-size: 24px; data-variant: Hero;"
        );
    }

    #[test]
    fn test_encode_set_empty() {
        assert_eq!(encode_set(&AttributeSet::new()), "");
    }

    #[test]
    fn test_merge_preserves_untouched_keys() {
        let style = encode(
            "color: red; font-size: 12px;",
            &AttributePatch::new().with(AttrKey::FontSize, "16px"),
        );
        let attrs = decode(&style);
        assert_eq!(attrs.get(AttrKey::Color), Some("red"));
        assert_eq!(attrs.get(AttrKey::FontSize), Some("16px"));
    }

    #[test]
    fn test_clearing_removes_key() {
        let style = encode("color: red;", &AttributePatch::new().with(AttrKey::Color, ""));
        assert_eq!(style, "");
        assert!(!decode(&style).contains(AttrKey::Color));
    }

    #[test]
    fn test_exactly_one_occurrence_after_replace() {
        let style = encode(
            "font-size: 12px; color: red; font-size: 14px;",
            &AttributePatch::new().with(AttrKey::FontSize, "16px"),
        );
        assert_eq!(style.matches("font-size:").count(), 1);
        assert!(style.contains("font-size: 16px;"));
    }

    #[test]
    fn test_clearing_absent_key_is_noop() {
        let style = encode("color: red;", &AttributePatch::new().with(AttrKey::LineHeight, ""));
        assert_eq!(style, "color: red;");
    }

    #[test]
    fn test_empty_patch_normalizes() {
        let style = encode("font-size:12px;color:red", &AttributePatch::new());
        assert_eq!(style, "color: red; font-size: 12px;");
    }

    #[test]
    fn test_unknown_properties_are_dropped() {
        let style = encode(
            "font-weight: 700; color: red;",
            &AttributePatch::new().with(AttrKey::FontSize, "16px"),
        );
        assert_eq!(style, "color: red; font-size: 16px;");
    }

    #[test]
    fn test_encode_is_idempotent() {
        let patch = AttributePatch::new()
            .with(AttrKey::LineHeight, "1.5")
            .with(AttrKey::Color, "");
        let once = encode("color: red; font-size: 12px;", &patch);
        assert_eq!(encode(&once, &patch), once);
    }
}
