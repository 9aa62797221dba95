//! Named typography variants.
//!
//! A variant bundles per-breakpoint typography settings under a name. Hosts
//! supply variants once at startup; at runtime they are read-only and looked
//! up by name.
//!
//! - [`VariantDefinition`] / [`DeviceSettings`]: the configuration records
//! - [`resolve`]: expands a name into an [`AttributePatch`](crate::AttributePatch)
//! - [`VariantCatalog`]: an ordered, validated collection loaded from YAML or JSON

mod catalog;
mod definition;
mod resolve;

pub use catalog::VariantCatalog;
pub use definition::{DeviceSettings, VariantDefinition};
pub use resolve::{clear_patch, resolve};
