//! Fixed responsive breakpoints.

use std::fmt;

use crate::attrs::AttrKey;

/// A device class with a fixed media condition.
///
/// The boundaries (767px / 768px-1023px / 1024px) are part of the format and
/// are not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// All breakpoints, in the order their rules are emitted.
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    /// The media condition selecting this device class.
    pub const fn media_condition(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "(max-width: 767px)",
            Breakpoint::Tablet => "(min-width: 768px) and (max-width: 1023px)",
            Breakpoint::Desktop => "(min-width: 1024px)",
        }
    }

    /// The attribute holding this device's font size.
    pub const fn font_size_key(self) -> AttrKey {
        match self {
            Breakpoint::Mobile => AttrKey::MobileFontSize,
            Breakpoint::Tablet => AttrKey::TabletFontSize,
            Breakpoint::Desktop => AttrKey::DesktopFontSize,
        }
    }

    /// The attribute holding this device's line height.
    pub const fn line_height_key(self) -> AttrKey {
        match self {
            Breakpoint::Mobile => AttrKey::MobileLineHeight,
            Breakpoint::Tablet => AttrKey::TabletLineHeight,
            Breakpoint::Desktop => AttrKey::DesktopLineHeight,
        }
    }

    /// The `@media` rule applying this device's custom properties.
    ///
    /// The rule reads the values through `var()`, so a device without its own
    /// values references an undefined property rather than a literal.
    pub fn rule(self) -> String {
        format!(
            "@media {} {{ font-size: var({}) !important; line-height: var({}) !important; }}",
            self.media_condition(),
            self.font_size_key().property(),
            self.line_height_key().property(),
        )
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        })
    }
}
