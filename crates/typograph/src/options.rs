//! Typography option lists offered to editors.
//!
//! Each typography control (size, line height, letter spacing, family,
//! color) offers a list of preset values. Hosts either replace the built-in
//! presets or append their own, and may edit any value freely; a value that
//! matches no preset is a "custom" value.

use std::fmt;
use std::path::Path;

use cssparser::{Parser, ParserInput, Token};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::{load_file, ConfigFormat};
use crate::error::ConfigError;
use crate::variant::{VariantCatalog, VariantDefinition};

/// A preset value and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueOption {
    pub value: String,
    pub label: String,
}

impl ValueOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// How host-supplied presets combine with the built-in ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    /// Host presets, when given, replace the built-ins.
    #[default]
    Replace,
    /// Host presets are appended after the built-ins.
    Combine,
}

fn presets(pairs: &[(&str, &str)]) -> Vec<ValueOption> {
    pairs
        .iter()
        .map(|(value, label)| ValueOption::new(*value, *label))
        .collect()
}

/// Built-in font size presets.
///
/// A starting scale chosen by this crate; hosts usually replace it.
pub static DEFAULT_FONT_SIZES: Lazy<Vec<ValueOption>> = Lazy::new(|| {
    presets(&[
        ("12px", "12px"),
        ("14px", "14px"),
        ("16px", "16px"),
        ("18px", "18px"),
        ("24px", "24px"),
        ("32px", "32px"),
    ])
});

/// Built-in line height presets.
pub static DEFAULT_LINE_HEIGHTS: Lazy<Vec<ValueOption>> =
    Lazy::new(|| presets(&[("1", "1"), ("1.5", "1.5"), ("2", "2"), ("2.5", "2.5")]));

/// Built-in letter spacing presets.
///
/// A small tight-to-wider scale chosen by this crate; hosts usually replace it.
pub static DEFAULT_LETTER_SPACINGS: Lazy<Vec<ValueOption>> = Lazy::new(|| {
    presets(&[
        ("-0.05em", "Tight"),
        ("0", "Normal"),
        ("0.05em", "Wide"),
        ("0.1em", "Wider"),
    ])
});

/// Built-in font family presets.
pub static DEFAULT_FONT_FAMILIES: Lazy<Vec<ValueOption>> = Lazy::new(|| {
    presets(&[
        ("Arial, sans-serif", "Arial"),
        ("Times New Roman, serif", "Times New Roman"),
        ("Courier New, monospace", "Courier New"),
        ("Georgia, serif", "Georgia"),
    ])
});

/// Combines built-in presets with host presets.
///
/// With [`MergeMethod::Replace`] the host list is used when present and the
/// built-ins otherwise. With [`MergeMethod::Combine`] the host list is
/// appended to the built-ins.
pub fn merge_options(
    defaults: &[ValueOption],
    custom: Option<&[ValueOption]>,
    method: MergeMethod,
) -> Vec<ValueOption> {
    match (method, custom) {
        (MergeMethod::Replace, Some(custom)) => custom.to_vec(),
        (MergeMethod::Replace, None) => defaults.to_vec(),
        (MergeMethod::Combine, custom) => defaults
            .iter()
            .chain(custom.unwrap_or_default())
            .cloned()
            .collect(),
    }
}

/// Returns true if `value` is set but matches none of the presets.
pub fn is_custom(value: &str, options: &[ValueOption]) -> bool {
    !value.is_empty() && !options.iter().any(|o| o.value == value)
}

/// Preset configuration for one control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
    pub options: Option<Vec<ValueOption>>,
    pub method: MergeMethod,
}

impl OptionsConfig {
    /// Resolves the effective presets against the built-ins.
    pub fn resolve(&self, defaults: &[ValueOption]) -> Vec<ValueOption> {
        merge_options(defaults, self.options.as_deref(), self.method)
    }
}

/// Static typography configuration supplied by a host at startup.
///
/// # Example
///
/// ```rust
/// use typograph::TypographyConfig;
///
/// let config = TypographyConfig::from_yaml_str(r#"
/// lineHeights:
///   method: combine
///   options:
///     - { value: "3", label: "3" }
/// "#).unwrap();
///
/// let values: Vec<_> = config.line_heights().into_iter().map(|o| o.value).collect();
/// assert_eq!(values, vec!["1", "1.5", "2", "2.5", "3"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyConfig {
    pub font_sizes: OptionsConfig,
    pub line_heights: OptionsConfig,
    pub letter_spacings: OptionsConfig,
    pub font_families: OptionsConfig,
    pub colors: OptionsConfig,
    pub variants: Vec<VariantDefinition>,
}

impl TypographyConfig {
    /// Parses a YAML document and validates its variants.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Self::parse(ConfigFormat::Yaml, source)
    }

    /// Parses a JSON document and validates its variants.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Self::parse(ConfigFormat::Json, source)
    }

    /// Loads a `.yaml`, `.yml` or `.json` file and validates its variants.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = load_file(path.as_ref())?;
        config.variant_catalog().validate()?;
        Ok(config)
    }

    fn parse(format: ConfigFormat, source: &str) -> Result<Self, ConfigError> {
        let config: Self = format.parse(source)?;
        config.variant_catalog().validate()?;
        Ok(config)
    }

    /// The configured variants as a catalog.
    pub fn variant_catalog(&self) -> VariantCatalog {
        VariantCatalog::new(self.variants.clone())
    }

    pub fn font_sizes(&self) -> Vec<ValueOption> {
        self.font_sizes.resolve(&DEFAULT_FONT_SIZES)
    }

    pub fn line_heights(&self) -> Vec<ValueOption> {
        self.line_heights.resolve(&DEFAULT_LINE_HEIGHTS)
    }

    pub fn letter_spacings(&self) -> Vec<ValueOption> {
        self.letter_spacings.resolve(&DEFAULT_LETTER_SPACINGS)
    }

    pub fn font_families(&self) -> Vec<ValueOption> {
        self.font_families.resolve(&DEFAULT_FONT_FAMILIES)
    }

    /// Color presets. There are no built-in colors.
    pub fn colors(&self) -> Vec<ValueOption> {
        self.colors.resolve(&[])
    }
}

/// Units a custom value may carry. The empty unit is a unitless number.
pub const UNITS: [&str; 7] = ["", "px", "rem", "em", "vh", "vw", "%"];

/// A numeric value split into number and unit, as edited in a custom field.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub number: f32,
    /// One of [`UNITS`]; unrecognized units are reported as `""`.
    pub unit: &'static str,
}

impl Dimension {
    /// Splits a CSS value such as `1.5`, `16px` or `50%`.
    ///
    /// Returns `None` when the value is not a single numeric token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typograph::Dimension;
    ///
    /// let d = Dimension::parse("1.25rem").unwrap();
    /// assert_eq!((d.number, d.unit), (1.25, "rem"));
    /// assert_eq!(Dimension::parse("normal"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        let mut input = ParserInput::new(value);
        let mut parser = Parser::new(&mut input);
        let token = parser.next().ok()?.clone();
        parser.expect_exhausted().ok()?;

        match token {
            Token::Number { value, .. } => Some(Dimension { number: value, unit: "" }),
            Token::Percentage { unit_value, .. } => Some(Dimension {
                number: unit_value * 100.0,
                unit: "%",
            }),
            Token::Dimension { value, unit, .. } => {
                let unit = unit.to_ascii_lowercase();
                Some(Dimension {
                    number: value,
                    unit: UNITS.into_iter().find(|u| *u == unit).unwrap_or(""),
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.unit)
    }
}
