//! Markup tree types and HTML serialization.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::escape::{escape_attr, escape_text};

/// An element with a tag, ordered attributes, and children.
///
/// Attributes keep their insertion order so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    tag: String,
    #[serde(serialize_with = "serialize_attributes")]
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, returning the updated element for chaining.
    ///
    /// Setting a name that is already present replaces its value in place,
    /// keeping the original position.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Sets an attribute in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Appends a child node, returning the updated element for chaining.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Returns the tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the value of the named attribute, if set.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Returns the child nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn write_html(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape_attr(value))?;
        }
        f.write_str(">")?;
        for child in &self.children {
            child.write_html(f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn serialize_attributes<S: Serializer>(
    attributes: &[(String, String)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(attributes.len()))?;
    for (name, value) in attributes {
        map.serialize_entry(name, value)?;
    }
    map.end()
}

/// A node in the markup tree.
///
/// Serializes untagged: text becomes a JSON string, elements become objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Raw (unescaped) text; escaped when written as HTML.
    Text(String),
}

impl Node {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Wraps this node as the only child of `element`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typograph_markup::{Element, Node};
    ///
    /// let node = Node::text("x")
    ///     .wrap(Element::new("strong"))
    ///     .wrap(Element::new("em"));
    /// assert_eq!(node.to_html(), "<em><strong>x</strong></em>");
    /// ```
    pub fn wrap(self, element: Element) -> Node {
        Node::Element(element.child(self))
    }

    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Serializes the node to an HTML string.
    pub fn to_html(&self) -> String {
        self.to_string()
    }

    fn write_html(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => el.write_html(f),
            Node::Text(text) => f.write_str(&escape_text(text)),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_html(f)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An ordered fragment of top-level nodes.
///
/// An empty fragment serializes to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup {
    nodes: Vec<Node>,
}

impl Markup {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the fragment.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// Returns the top-level nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns true if the fragment has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serializes the fragment to an HTML string.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            node.write_html(f)?;
        }
        Ok(())
    }
}

impl From<Node> for Markup {
    fn from(node: Node) -> Self {
        Self { nodes: vec![node] }
    }
}
