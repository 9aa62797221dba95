//! Variant resolution.

use crate::attrs::{AttrKey, AttributePatch};

use super::definition::VariantDefinition;

/// Resolves a variant name into the patch that applies it.
///
/// The first definition whose name matches exactly wins. If no definition
/// matches (including the empty name), the result is the clear signal from
/// [`clear_patch`], so switching away from a variant fully undoes it.
///
/// # Example
///
/// ```rust
/// use typograph::{encode, resolve, DeviceSettings, VariantDefinition};
///
/// let variants = vec![VariantDefinition::new(
///     "Hero",
///     DeviceSettings::new("24px", "1.2"),
///     DeviceSettings::new("32px", "1.15"),
///     DeviceSettings::new("48px", "1.1"),
/// )];
///
/// let styled = encode("color: red;", &resolve(&variants, "Hero"));
/// assert!(styled.contains("data-variant: Hero;"));
///
/// let cleared = encode(&styled, &resolve(&variants, ""));
/// assert_eq!(cleared, "");
/// ```
pub fn resolve(variants: &[VariantDefinition], name: &str) -> AttributePatch {
    let found = if name.is_empty() {
        None
    } else {
        variants.iter().find(|v| v.name == name)
    };
    match found {
        Some(variant) => {
            tracing::debug!(variant = name, "resolved variant");
            variant.to_patch()
        }
        None => {
            tracing::debug!(variant = name, "no matching variant, clearing");
            clear_patch()
        }
    }
}

/// The patch that removes every variant-controlled key.
pub fn clear_patch() -> AttributePatch {
    AttributePatch::clear_all(AttrKey::VARIANT_CONTROLLED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::PatchValue;
    use crate::variant::DeviceSettings;

    fn variants() -> Vec<VariantDefinition> {
        vec![
            VariantDefinition::new(
                "Hero",
                DeviceSettings::new("24px", "1.2"),
                DeviceSettings::new("32px", "1.15"),
                DeviceSettings::new("48px", "1.1"),
            ),
            VariantDefinition::new(
                "Hero",
                DeviceSettings::new("1px", "1"),
                DeviceSettings::new("1px", "1"),
                DeviceSettings::new("1px", "1"),
            ),
        ]
    }

    #[test]
    fn test_resolve_known_variant() {
        let patch = resolve(&variants(), "Hero");
        assert_eq!(patch.get(AttrKey::Variant).map(PatchValue::as_str), Some("Hero"));
        assert_eq!(
            patch.get(AttrKey::MobileFontSize).map(PatchValue::as_str),
            Some("24px")
        );
        assert_eq!(
            patch.get(AttrKey::TabletLineHeight).map(PatchValue::as_str),
            Some("1.15")
        );
        assert_eq!(
            patch.get(AttrKey::DesktopFontSize).map(PatchValue::as_str),
            Some("48px")
        );
    }

    #[test]
    fn test_first_match_wins() {
        let patch = resolve(&variants(), "Hero");
        assert_eq!(patch.get(AttrKey::FontSize).map(PatchValue::as_str), Some("48px"));
    }

    #[test]
    fn test_match_is_exact() {
        assert_eq!(resolve(&variants(), "hero"), clear_patch());
        assert_eq!(resolve(&variants(), "Hero "), clear_patch());
    }

    #[test]
    fn test_unknown_and_empty_clear_everything() {
        for name in ["", "Missing"] {
            let patch = resolve(&variants(), name);
            assert_eq!(patch.len(), AttrKey::VARIANT_CONTROLLED.len());
            assert!(patch.iter().all(|(_, v)| *v == PatchValue::Clear));
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        assert_eq!(resolve(&variants(), ""), resolve(&variants(), ""));
        assert_eq!(resolve(&[], "Hero"), clear_patch());
    }
}
