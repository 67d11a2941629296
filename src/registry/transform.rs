//! Transform registry: the ordered id -> transform table.

use super::catalog::{entries_for_version, LATEST_CATALOG_VERSION};
use crate::transforms::Transform;

/// Errors raised while building a registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The requested catalog version does not exist
    #[error("unknown catalog version {requested} (available: 1..={latest})")]
    UnknownCatalogVersion { requested: u32, latest: u32 },
}

/// A registered transform with its stable id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub id: u32,
    pub name: &'static str,
    pub transform: Transform,
}

/// Append-only mapping from contiguous ids (starting at 0) to transforms.
///
/// Ids are handed out in registration order and never reused.
#[derive(Debug, Clone, Default)]
pub struct TransformRegistry {
    entries: Vec<RegistryEntry>,
}

impl TransformRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// The full catalog at the newest version.
    pub fn standard() -> Self {
        Self::from_catalog(LATEST_CATALOG_VERSION)
    }

    /// The catalog as published at `version`.
    pub fn for_version(version: u32) -> Result<Self, RegistryError> {
        if version == 0 || version > LATEST_CATALOG_VERSION {
            return Err(RegistryError::UnknownCatalogVersion {
                requested: version,
                latest: LATEST_CATALOG_VERSION,
            });
        }
        Ok(Self::from_catalog(version))
    }

    fn from_catalog(version: u32) -> Self {
        let mut registry = Self::new();
        for entry in entries_for_version(version) {
            registry.register(entry.name, entry.transform);
        }
        registry
    }

    /// Append a transform and return its id.
    pub fn register(&mut self, name: &'static str, transform: Transform) -> u32 {
        let id = self.entries.len() as u32;
        self.entries.push(RegistryEntry { id, name, transform });
        id
    }

    /// Get an entry by id.
    pub fn get(&self, id: u32) -> Option<&RegistryEntry> {
        self.entries.get(id as usize)
    }

    /// Get the transform registered under `id`.
    pub fn transform(&self, id: u32) -> Option<Transform> {
        self.get(id).map(|e| e.transform)
    }

    /// Check if an id is registered.
    pub fn contains(&self, id: u32) -> bool {
        (id as usize) < self.entries.len()
    }

    /// Get the number of registered transforms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    /// Entries as a slice, in ascending id order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|e| e.id)
    }
}
