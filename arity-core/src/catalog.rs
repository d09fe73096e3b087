//! Catalog loading and validation.
//!
//! The shipped catalog is `catalog.yaml`, baked into the binary at compile
//! time. Nothing is read from disk at runtime.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::types::{Catalog, RendererKind};

/// The catalog compiled into the binary.
pub const BUILTIN_CATALOG: &str = include_str!("catalog.yaml");

impl Catalog {
    /// Parse and validate a catalog from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate [`BUILTIN_CATALOG`].
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Check structural invariants: non-zero repeat count, unique collection
    /// names, unique labels per collection, and headers present exactly on
    /// header-variant entries.
    ///
    /// Slot usage is checked by the renderer when templates are compiled.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.repeat_count == 0 {
            return Err(CatalogError::ZeroRepeatCount);
        }
        let mut names = HashSet::new();
        for collection in &self.collections {
            if !names.insert(collection.name.as_str()) {
                return Err(CatalogError::DuplicateCollection {
                    collection: collection.name.clone(),
                });
            }
            let mut seen = HashSet::new();
            for entry in &collection.entries {
                if !seen.insert(&entry.label) {
                    return Err(CatalogError::DuplicateLabel {
                        collection: collection.name.clone(),
                        label: entry.label.clone(),
                    });
                }
                match (entry.renderer, &entry.headers) {
                    (RendererKind::HeaderVariant, None) => {
                        return Err(CatalogError::MissingHeaders {
                            collection: collection.name.clone(),
                            label: entry.label.clone(),
                        });
                    }
                    (RendererKind::Simple, Some(_)) => {
                        return Err(CatalogError::UnexpectedHeaders {
                            collection: collection.name.clone(),
                            label: entry.label.clone(),
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Total number of entries across all collections.
    pub fn entry_count(&self) -> usize {
        self.collections.iter().map(|c| c.entries.len()).sum()
    }
}
