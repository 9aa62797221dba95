//! A minimal markup tree with escaped HTML serialization.
//!
//! This crate provides the output side of typograph's renderer: a small tree of
//! [`Node`]s that can either be serialized to an HTML string or handed to a host
//! as structured data (via `serde`).
//!
//! - [`Element`]: a tag with ordered attributes and child nodes
//! - [`Node`]: an element or a run of text
//! - [`Markup`]: an ordered fragment of top-level nodes
//!
//! Text content and attribute values are always escaped on output. Tag and
//! attribute names are trusted and written verbatim.
//!
//! # Example
//!
//! ```rust
//! use typograph_markup::{Element, Node};
//!
//! let node = Node::text("a < b").wrap(Element::new("strong"));
//! assert_eq!(node.to_html(), "<strong>a &lt; b</strong>");
//! ```

mod escape;
mod node;

pub use escape::{escape_attr, escape_text};
pub use node::{Element, Markup, Node};
