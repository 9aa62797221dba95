//! Inline style declarations built from an attribute set.

use std::fmt;

use crate::attrs::{AttrKey, AttributeSet};

use super::breakpoint::Breakpoint;

/// The inline style for a styled run.
///
/// Holds one declaration per present style attribute (scalars under their
/// CSS name, responsive overrides under their custom property) and, when any
/// responsive attribute is present, the three breakpoint rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    declarations: Vec<(&'static str, String)>,
    breakpoints: Vec<Breakpoint>,
}

impl StyleDeclaration {
    /// Builds the declaration for an attribute set.
    ///
    /// The variant identifier is not a style and is skipped here.
    pub fn from_attrs(attrs: &AttributeSet) -> Self {
        let declarations = attrs
            .iter()
            .filter(|(key, _)| key.is_style())
            .map(|(key, value)| (key.property(), value.to_string()))
            .collect();
        let breakpoints = if attrs.has_responsive() {
            Breakpoint::ALL.to_vec()
        } else {
            Vec::new()
        };
        Self {
            declarations,
            breakpoints,
        }
    }

    /// Returns the value declared for a key, if any.
    pub fn get(&self, key: AttrKey) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(property, _)| *property == key.property())
            .map(|(_, value)| value.as_str())
    }

    /// Returns true if breakpoint rules are attached.
    pub fn is_responsive(&self) -> bool {
        !self.breakpoints.is_empty()
    }

    /// Returns true if there is nothing to emit.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.breakpoints.is_empty()
    }

    /// Serializes to inline CSS text.
    ///
    /// Declarations come first as `property: value;`, followed by the
    /// breakpoint rules, all separated by single spaces.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let declarations = self
            .declarations
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value));
        let rules = self.breakpoints.iter().map(|bp| bp.rule());
        let parts: Vec<String> = declarations.chain(rules).collect();
        f.write_str(&parts.join(" "))
    }
}
