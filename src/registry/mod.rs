//! Registry of augmentation transforms.
//!
//! This module provides:
//! - `CATALOG`, the append-only table of every published transform
//! - `TransformRegistry`, the id -> transform mapping built from a catalog
//!   version (or assembled by hand in tests)

mod catalog;
mod transform;

pub use catalog::{entries_for_version, CatalogEntry, CATALOG, LATEST_CATALOG_VERSION};
pub use transform::{RegistryEntry, RegistryError, TransformRegistry};
