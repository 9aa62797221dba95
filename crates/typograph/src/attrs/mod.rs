//! Attribute model for a single text run.
//!
//! - [`AttrKey`]: the closed set of recognized typography attributes
//! - [`AttributeSet`]: the decoded, in-memory attributes of one run
//! - [`AttributePatch`]: a partial edit with keep/clear semantics
//!
//! Values are opaque strings. No unit or numeric validation happens at this
//! layer; an attribute is either absent or holds a non-empty string.

mod key;
mod patch;
mod set;

pub use key::AttrKey;
pub use patch::{AttributePatch, PatchValue};
pub use set::AttributeSet;
