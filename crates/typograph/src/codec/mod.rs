//! Flat style-string codec.
//!
//! The flat style-string is the persisted form of an [`AttributeSet`]: a
//! sequence of `property: value;` pairs using literal CSS names for scalar
//! attributes, custom properties (`--mobile-font-size`, ...) for responsive
//! overrides, and a `data-variant` pseudo-property for the variant name.
//!
//! - [`decode`] parses a style-string into an [`AttributeSet`], dropping
//!   anything it does not recognize
//! - [`encode`] merges an [`AttributePatch`] into an existing style-string
//! - [`encode_set`] serializes an [`AttributeSet`] canonically
//!
//! The codec only ever stores key/value pairs. Breakpoint rules are a
//! rendering concern and never appear in the stored string.
//!
//! [`AttributeSet`]: crate::AttributeSet
//! [`AttributePatch`]: crate::AttributePatch

mod decode;
mod encode;

pub use decode::{current_value, decode};
pub use encode::{encode, encode_set};
