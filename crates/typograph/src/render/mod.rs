//! Rendering typography attributes and format flags into markup.
//!
//! [`render`] turns one text run into a [`Markup`](typograph_markup::Markup)
//! tree with a fixed nesting:
//!
//! 1. the escaped text
//! 2. a styled `span` carrying the inline style and `data-variant`, only when
//!    there is something to carry
//! 3. one wrapper per format flag, applied in [`FormatFlags::WRAP_ORDER`]
//!
//! Responsive attributes are emitted as custom properties plus three
//! [`Breakpoint`] rules appended to the inline style.
//!
//! [`FormatFlags::WRAP_ORDER`]: crate::FormatFlags::WRAP_ORDER

mod breakpoint;
mod style;
mod text;

pub use breakpoint::Breakpoint;
pub use style::StyleDeclaration;
pub use text::{render, render_html, render_style, RESPONSIVE_MARKER};
