//! Escaping for text content and attribute values.

use std::borrow::Cow;

/// Escapes text for embedding as element content.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with entity references. Borrows the input
/// when nothing needs escaping.
///
/// # Example
///
/// ```rust
/// use typograph_markup::escape_text;
///
/// assert_eq!(escape_text("Tom & Jerry"), "Tom &amp; Jerry");
/// assert_eq!(escape_text("plain"), "plain");
/// ```
pub fn escape_text(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}

/// Escapes a value for use inside a double-quoted attribute.
pub fn escape_attr(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}
