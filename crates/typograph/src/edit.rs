//! Editor commands applied to a stored style-string.
//!
//! Each toolbar action becomes an [`Edit`]. Applying an edit decodes the
//! stored string, merges the edit's patch and re-encodes it in one step, so
//! a host that applies one edit at a time never interleaves partial updates.

use serde::{Deserialize, Serialize};

use crate::attrs::{AttrKey, AttributePatch};
use crate::codec::encode;
use crate::variant::VariantCatalog;

/// A single typography edit from the host.
///
/// An empty value clears the property, which is how a toolbar "reset" is
/// expressed.
///
/// Serialized adjacently tagged, e.g. `{"kind": "fontSize", "value": "16px"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Edit {
    Color(String),
    FontSize(String),
    LetterSpacing(String),
    LineHeight(String),
    FontFamily(String),
    /// Apply a named variant; unknown or empty names clear every variant-controlled key.
    Variant(String),
    /// An arbitrary partial edit.
    Patch(AttributePatch),
}

impl Edit {
    /// Expands the edit into the patch it applies.
    pub fn to_patch(&self, catalog: &VariantCatalog) -> AttributePatch {
        let single = |key: AttrKey, value: &str| AttributePatch::new().with(key, value);
        match self {
            Edit::Color(v) => single(AttrKey::Color, v),
            Edit::FontSize(v) => single(AttrKey::FontSize, v),
            Edit::LetterSpacing(v) => single(AttrKey::LetterSpacing, v),
            Edit::LineHeight(v) => single(AttrKey::LineHeight, v),
            Edit::FontFamily(v) => single(AttrKey::FontFamily, v),
            Edit::Variant(name) => catalog.resolve(name),
            Edit::Patch(patch) => patch.clone(),
        }
    }
}

/// Applies one edit to a stored style-string and returns the new string.
///
/// # Example
///
/// ```rust
/// use typograph::{apply_edit, Edit, VariantCatalog};
///
/// let catalog = VariantCatalog::default();
/// let style = apply_edit("color: red;", &Edit::FontSize("16px".into()), &catalog);
/// assert_eq!(style, "color: red; font-size: 16px;");
///
/// let style = apply_edit(&style, &Edit::Color(String::new()), &catalog);
/// assert_eq!(style, "font-size: 16px;");
/// ```
pub fn apply_edit(style: &str, edit: &Edit, catalog: &VariantCatalog) -> String {
    encode(style, &edit.to_patch(catalog))
}
