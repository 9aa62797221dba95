//! Typography attributes for rich-text runs: codec, variants and rendering.
//!
//! A text run in a rich-text document carries a flat style-string such as
//! `"color: red; font-size: 16px;"` plus a bitmask of format flags (bold,
//! italic, ...). This crate handles everything between that stored form and
//! the markup shown to readers:
//!
//! - [`decode`] / [`encode`]: the style-string codec, with keep/clear merge rules
//! - [`resolve`] / [`VariantCatalog`]: named variants carrying per-breakpoint values
//! - [`render`]: deterministic markup with responsive breakpoint rules
//! - [`apply_edit`]: one editor command applied as a single decode/merge/encode step
//!
//! # Example
//!
//! ```rust
//! use typograph::{encode, decode, render, AttrKey, AttributePatch, FormatFlags};
//!
//! // An editor changes the font size of a run.
//! let stored = encode(
//!     "color: red; font-size: 12px;",
//!     &AttributePatch::new().with(AttrKey::FontSize, "16px"),
//! );
//! assert_eq!(stored, "color: red; font-size: 16px;");
//!
//! // The document is rendered.
//! let html = render("Hello", &decode(&stored), FormatFlags::BOLD).to_html();
//! assert_eq!(
//!     html,
//!     r#"<strong><span style="color: red; font-size: 16px;">Hello</span></strong>"#
//! );
//! ```
//!
//! All operations are pure functions over their inputs. Hosts are expected to
//! apply one edit at a time to a given run.

pub mod attrs;
pub mod codec;
mod config;
mod edit;
mod error;
mod format;
mod options;
pub mod render;
pub mod variant;

pub use attrs::{AttrKey, AttributePatch, AttributeSet, PatchValue};
pub use codec::{current_value, decode, encode, encode_set};
pub use config::ConfigFormat;
pub use edit::{apply_edit, Edit};
pub use error::ConfigError;
pub use format::FormatFlags;
pub use options::{
    is_custom, merge_options, Dimension, MergeMethod, OptionsConfig, TypographyConfig,
    ValueOption, DEFAULT_FONT_FAMILIES, DEFAULT_FONT_SIZES, DEFAULT_LETTER_SPACINGS,
    DEFAULT_LINE_HEIGHTS, UNITS,
};
pub use render::{render, render_html, render_style, Breakpoint, StyleDeclaration};
pub use variant::{clear_patch, resolve, DeviceSettings, VariantCatalog, VariantDefinition};

// Re-export the markup tree so hosts don't need a direct dependency.
pub use typograph_markup::{Element, Markup, Node};
