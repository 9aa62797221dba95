//! Variant configuration records.

use serde::{Deserialize, Serialize};

use crate::attrs::{AttrKey, AttributePatch, PatchValue};

/// Typography settings for one device class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSettings {
    pub font_size: String,
    pub line_height: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DeviceSettings {
    /// Creates settings with the two required values.
    pub fn new(font_size: impl Into<String>, line_height: impl Into<String>) -> Self {
        Self {
            font_size: font_size.into(),
            line_height: line_height.into(),
            letter_spacing: None,
            font_family: None,
            color: None,
        }
    }

    /// Sets the letter spacing.
    pub fn letter_spacing(mut self, value: impl Into<String>) -> Self {
        self.letter_spacing = Some(value.into());
        self
    }

    /// Sets the font family.
    pub fn font_family(mut self, value: impl Into<String>) -> Self {
        self.font_family = Some(value.into());
        self
    }

    /// Sets the color.
    pub fn color(mut self, value: impl Into<String>) -> Self {
        self.color = Some(value.into());
        self
    }
}

/// A named bundle of mobile, tablet and desktop settings.
///
/// # Example
///
/// ```rust
/// use typograph::{DeviceSettings, VariantDefinition};
///
/// let hero = VariantDefinition::new(
///     "Hero",
///     DeviceSettings::new("24px", "1.2"),
///     DeviceSettings::new("32px", "1.15"),
///     DeviceSettings::new("48px", "1.1").font_family("Georgia, serif"),
/// );
/// assert_eq!(hero.name, "Hero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDefinition {
    pub name: String,
    pub mobile: DeviceSettings,
    pub tablet: DeviceSettings,
    pub desktop: DeviceSettings,
}

impl VariantDefinition {
    /// Creates a variant from its three device settings.
    pub fn new(
        name: impl Into<String>,
        mobile: DeviceSettings,
        tablet: DeviceSettings,
        desktop: DeviceSettings,
    ) -> Self {
        Self {
            name: name.into(),
            mobile,
            tablet,
            desktop,
        }
    }

    /// The patch that applies this variant.
    ///
    /// Desktop settings double as the non-responsive base values. Optional
    /// desktop settings that are missing clear any previous value, so applying
    /// a variant never inherits stale letter spacing, family or color.
    pub fn to_patch(&self) -> AttributePatch {
        let desktop = &self.desktop;
        AttributePatch::new()
            .with(AttrKey::FontSize, desktop.font_size.as_str())
            .with(AttrKey::LineHeight, desktop.line_height.as_str())
            .with(AttrKey::LetterSpacing, PatchValue::from(desktop.letter_spacing.clone()))
            .with(AttrKey::FontFamily, PatchValue::from(desktop.font_family.clone()))
            .with(AttrKey::Color, PatchValue::from(desktop.color.clone()))
            .with(AttrKey::MobileFontSize, self.mobile.font_size.as_str())
            .with(AttrKey::MobileLineHeight, self.mobile.line_height.as_str())
            .with(AttrKey::TabletFontSize, self.tablet.font_size.as_str())
            .with(AttrKey::TabletLineHeight, self.tablet.line_height.as_str())
            .with(AttrKey::DesktopFontSize, desktop.font_size.as_str())
            .with(AttrKey::DesktopLineHeight, desktop.line_height.as_str())
            .with(AttrKey::Variant, self.name.as_str())
    }
}
