//! The closed set of recognized typography attribute keys.

use std::fmt;

/// A recognized typography attribute.
///
/// The declaration order is the canonical order used everywhere keys are
/// serialized: scalar properties first, then the responsive overrides, then
/// the variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttrKey {
    Color,
    FontSize,
    LetterSpacing,
    LineHeight,
    FontFamily,
    MobileFontSize,
    MobileLineHeight,
    TabletFontSize,
    TabletLineHeight,
    DesktopFontSize,
    DesktopLineHeight,
    Variant,
}

impl AttrKey {
    /// Every key, in canonical order.
    pub const ALL: [AttrKey; 12] = [
        AttrKey::Color,
        AttrKey::FontSize,
        AttrKey::LetterSpacing,
        AttrKey::LineHeight,
        AttrKey::FontFamily,
        AttrKey::MobileFontSize,
        AttrKey::MobileLineHeight,
        AttrKey::TabletFontSize,
        AttrKey::TabletLineHeight,
        AttrKey::DesktopFontSize,
        AttrKey::DesktopLineHeight,
        AttrKey::Variant,
    ];

    /// Keys stored as plain CSS properties.
    pub const SCALAR: [AttrKey; 5] = [
        AttrKey::Color,
        AttrKey::FontSize,
        AttrKey::LetterSpacing,
        AttrKey::LineHeight,
        AttrKey::FontFamily,
    ];

    /// Per-breakpoint overrides stored as custom properties.
    pub const RESPONSIVE: [AttrKey; 6] = [
        AttrKey::MobileFontSize,
        AttrKey::MobileLineHeight,
        AttrKey::TabletFontSize,
        AttrKey::TabletLineHeight,
        AttrKey::DesktopFontSize,
        AttrKey::DesktopLineHeight,
    ];

    /// Keys a variant controls. Clearing a variant removes all of them.
    pub const VARIANT_CONTROLLED: [AttrKey; 12] = AttrKey::ALL;

    /// The property name used in the flat style-string.
    ///
    /// Scalars use their literal CSS name, responsive keys a custom property,
    /// and the variant the `data-variant` pseudo-property.
    pub const fn property(self) -> &'static str {
        match self {
            AttrKey::Color => "color",
            AttrKey::FontSize => "font-size",
            AttrKey::LetterSpacing => "letter-spacing",
            AttrKey::LineHeight => "line-height",
            AttrKey::FontFamily => "font-family",
            AttrKey::MobileFontSize => "--mobile-font-size",
            AttrKey::MobileLineHeight => "--mobile-line-height",
            AttrKey::TabletFontSize => "--tablet-font-size",
            AttrKey::TabletLineHeight => "--tablet-line-height",
            AttrKey::DesktopFontSize => "--desktop-font-size",
            AttrKey::DesktopLineHeight => "--desktop-line-height",
            AttrKey::Variant => "data-variant",
        }
    }

    /// The camelCase field name hosts use in structured documents.
    pub const fn field_name(self) -> &'static str {
        match self {
            AttrKey::Color => "color",
            AttrKey::FontSize => "fontSize",
            AttrKey::LetterSpacing => "letterSpacing",
            AttrKey::LineHeight => "lineHeight",
            AttrKey::FontFamily => "fontFamily",
            AttrKey::MobileFontSize => "mobileFontSize",
            AttrKey::MobileLineHeight => "mobileLineHeight",
            AttrKey::TabletFontSize => "tabletFontSize",
            AttrKey::TabletLineHeight => "tabletLineHeight",
            AttrKey::DesktopFontSize => "desktopFontSize",
            AttrKey::DesktopLineHeight => "desktopLineHeight",
            AttrKey::Variant => "variant",
        }
    }

    /// Returns true for the six per-breakpoint keys.
    pub const fn is_responsive(self) -> bool {
        matches!(
            self,
            AttrKey::MobileFontSize
                | AttrKey::MobileLineHeight
                | AttrKey::TabletFontSize
                | AttrKey::TabletLineHeight
                | AttrKey::DesktopFontSize
                | AttrKey::DesktopLineHeight
        )
    }

    /// Returns true for keys rendered as ordinary style declarations
    /// (everything except the variant identifier).
    pub const fn is_style(self) -> bool {
        !matches!(self, AttrKey::Variant)
    }

    /// Looks up a key by its style-string property name.
    pub fn from_property(property: &str) -> Option<AttrKey> {
        AttrKey::ALL.into_iter().find(|k| k.property() == property)
    }

    /// Looks up a key by its camelCase field name.
    pub fn from_field_name(name: &str) -> Option<AttrKey> {
        AttrKey::ALL.into_iter().find(|k| k.field_name() == name)
    }
}

impl fmt::Display for AttrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}
