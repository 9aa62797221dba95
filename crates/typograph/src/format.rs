//! Boolean text-format flags.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use typograph_markup::Element;

bitflags::bitflags! {
    /// Independent text-format toggles, stored as the host editor's bitmask.
    ///
    /// Flags are orthogonal to the typography attributes. Bits the renderer
    /// does not know are dropped by [`FormatFlags::from_mask`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FormatFlags: u32 {
        const BOLD          = 1;
        const ITALIC        = 1 << 1;
        const STRIKETHROUGH = 1 << 2;
        const UNDERLINE     = 1 << 3;
        const CODE          = 1 << 4;
        const SUBSCRIPT     = 1 << 5;
        const SUPERSCRIPT   = 1 << 6;
    }
}

impl FormatFlags {
    /// The order flags are applied in when rendering.
    ///
    /// Each flag wraps the result accumulated so far, so `BOLD` ends up
    /// innermost and `SUPERSCRIPT` outermost, independent of how or when the
    /// flags were set.
    pub const WRAP_ORDER: [FormatFlags; 7] = [
        FormatFlags::BOLD,
        FormatFlags::ITALIC,
        FormatFlags::STRIKETHROUGH,
        FormatFlags::UNDERLINE,
        FormatFlags::CODE,
        FormatFlags::SUBSCRIPT,
        FormatFlags::SUPERSCRIPT,
    ];

    /// Builds flags from a raw mask, ignoring unknown bits.
    pub fn from_mask(mask: u32) -> Self {
        Self::from_bits_truncate(mask)
    }

    /// Returns the wrapper element for a single flag.
    ///
    /// Strikethrough and underline become inline-styled spans; the rest map
    /// to semantic elements. Returns `None` for empty or combined flags.
    pub fn wrapper(self) -> Option<Element> {
        let element = if self == FormatFlags::BOLD {
            Element::new("strong")
        } else if self == FormatFlags::ITALIC {
            Element::new("em")
        } else if self == FormatFlags::STRIKETHROUGH {
            Element::new("span").attr("style", "text-decoration: line-through")
        } else if self == FormatFlags::UNDERLINE {
            Element::new("span").attr("style", "text-decoration: underline")
        } else if self == FormatFlags::CODE {
            Element::new("code")
        } else if self == FormatFlags::SUBSCRIPT {
            Element::new("sub")
        } else if self == FormatFlags::SUPERSCRIPT {
            Element::new("sup")
        } else {
            return None;
        };
        Some(element)
    }

    /// The set flags, in wrap order.
    pub fn in_wrap_order(self) -> impl Iterator<Item = FormatFlags> {
        FormatFlags::WRAP_ORDER
            .into_iter()
            .filter(move |flag| self.contains(*flag))
    }
}

impl Serialize for FormatFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for FormatFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(FormatFlags::from_mask)
    }
}
