//! Text run rendering.

use typograph_markup::{escape_text, Element, Markup, Node};

use crate::attrs::AttributeSet;
use crate::codec::decode;
use crate::format::FormatFlags;

use super::style::StyleDeclaration;

/// Attribute set on styled runs that carry breakpoint rules.
pub const RESPONSIVE_MARKER: &str = "data-has-responsive-typography";

/// Renders one text run into markup.
///
/// Empty text renders to empty markup whatever the attributes and flags.
/// Otherwise the text is wrapped in a styled `span` when the attributes
/// produce a style or a variant, then in one wrapper per set flag, in the
/// fixed [`FormatFlags::WRAP_ORDER`]. Text and attribute values are escaped
/// when the markup is serialized.
///
/// # Example
///
/// ```rust
/// use typograph::{render, AttrKey, AttributeSet, FormatFlags};
///
/// let attrs = AttributeSet::new().with(AttrKey::Color, "red");
/// let markup = render("x", &attrs, FormatFlags::BOLD | FormatFlags::ITALIC);
/// assert_eq!(
///     markup.to_html(),
///     r#"<em><strong><span style="color: red;">x</span></strong></em>"#
/// );
/// ```
pub fn render(text: &str, attrs: &AttributeSet, flags: FormatFlags) -> Markup {
    if escape_text(text).is_empty() {
        return Markup::new();
    }

    let mut node = Node::text(text);
    if let Some(wrapper) = styled_wrapper(attrs) {
        node = node.wrap(wrapper);
    }
    for flag in flags.in_wrap_order() {
        if let Some(wrapper) = flag.wrapper() {
            node = node.wrap(wrapper);
        }
    }
    Markup::from(node)
}

/// Renders one text run straight to an HTML string.
pub fn render_html(text: &str, attrs: &AttributeSet, flags: FormatFlags) -> String {
    render(text, attrs, flags).to_html()
}

/// Decodes a stored style-string and renders the run with a raw flag mask.
///
/// Unknown bits in `mask` are ignored.
pub fn render_style(style: &str, text: &str, mask: u32) -> Markup {
    render(text, &decode(style), FormatFlags::from_mask(mask))
}

/// The styled span for a run, or `None` when it would carry nothing.
fn styled_wrapper(attrs: &AttributeSet) -> Option<Element> {
    let style = StyleDeclaration::from_attrs(attrs);
    let variant = attrs.variant();
    if style.is_empty() && variant.is_none() {
        return None;
    }

    let mut span = Element::new("span");
    if !style.is_empty() {
        span.set_attr("style", style.to_css());
    }
    if let Some(name) = variant {
        span.set_attr("data-variant", name);
    }
    if style.is_responsive() {
        span.set_attr(RESPONSIVE_MARKER, "true");
    }
    Some(span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::AttrKey;

    #[test]
    fn test_plain_text_has_no_wrapper() {
        assert_eq!(render_html("hello", &AttributeSet::new(), FormatFlags::empty()), "hello");
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_html("<b>&</b>", &AttributeSet::new(), FormatFlags::empty());
        assert_eq!(html, "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn test_empty_text_short_circuits() {
        let attrs = AttributeSet::new()
            .with(AttrKey::Color, "red")
            .with(AttrKey::Variant, "Hero");
        let markup = render("", &attrs, FormatFlags::all());
        assert!(markup.is_empty());
        assert_eq!(markup.to_html(), "");
    }

    #[test]
    fn test_style_wrapper() {
        let attrs = AttributeSet::new()
            .with(AttrKey::FontSize, "16px")
            .with(AttrKey::LineHeight, "1.5");
        assert_eq!(
            render_html("a", &attrs, FormatFlags::empty()),
            r#"<span style="font-size: 16px; line-height: 1.5;">a</span>"#
        );
    }

    #[test]
    fn test_variant_only_wrapper() {
        let attrs = AttributeSet::new().with(AttrKey::Variant, "Hero");
        assert_eq!(
            render_html("a", &attrs, FormatFlags::empty()),
            r#"<span data-variant="Hero">a</span>"#
        );
    }

    #[test]
    fn test_responsive_marker() {
        let attrs = AttributeSet::new().with(AttrKey::MobileFontSize, "20px");
        let markup = render("a", &attrs, FormatFlags::empty());
        let span = markup.nodes()[0].as_element().unwrap();
        assert_eq!(span.get_attr(RESPONSIVE_MARKER), Some("true"));
        assert_eq!(span.get_attr("style").map(|s| s.matches("@media").count()), Some(3));
    }

    #[test]
    fn test_all_flags_nest_in_fixed_order() {
        let html = render_html("x", &AttributeSet::new(), FormatFlags::all());
        assert_eq!(
            html,
            "<sup><sub><code>\
             <span style=\"text-decoration: underline\">\
             <span style=\"text-decoration: line-through\">\
             <em><strong>x</strong></em>\
             </span></span></code></sub></sup>"
        );
    }

    #[test]
    fn test_flags_wrap_styled_span() {
        let attrs = AttributeSet::new().with(AttrKey::Color, "red");
        assert_eq!(
            render_html("x", &attrs, FormatFlags::CODE),
            r#"<code><span style="color: red;">x</span></code>"#
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let attrs = AttributeSet::new().with(AttrKey::FontFamily, r#""Comic Sans", cursive"#);
        let html = render_html("x", &attrs, FormatFlags::empty());
        assert!(html.contains("&quot;Comic Sans&quot;"));
    }

    #[test]
    fn test_render_style_ignores_unknown_bits() {
        let markup = render_style("color: red;", "x", 1 | 1 << 12);
        assert_eq!(
            markup.to_html(),
            r#"<strong><span style="color: red;">x</span></strong>"#
        );
    }
}
