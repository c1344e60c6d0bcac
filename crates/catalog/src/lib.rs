// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only lookup store over the agency catalog.
//!
//! The catalog (agencies and their components, without detail payloads)
//! is loaded once before any selection is resolved. After that the only
//! mutation is merging a fetched detail payload into a component.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod index;
mod loader;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use foia_finder_domain::{Agency, AgencyComponent};
use tracing::info;

use crate::index::CatalogIndex;

pub use error::CatalogError;
pub use loader::{CatalogDocument, load_catalog, parse_catalog};

/// Indexed, shareable access to the agency catalog.
///
/// Reads take a shared lock and return owned copies. The detail merge
/// takes the exclusive lock and replaces the stored component whole, so
/// readers never observe a partially merged entity.
#[derive(Debug)]
pub struct CatalogStore {
    index: RwLock<CatalogIndex>,
}

impl CatalogStore {
    /// Builds a store from catalog records.
    ///
    /// Record order is preserved and becomes the catalog order returned
    /// by every listing query.
    ///
    /// # Arguments
    ///
    /// * `agencies` - All agencies in catalog order
    /// * `components` - All agency components in catalog order
    ///
    /// # Errors
    ///
    /// Returns an error if the records do not form a valid catalog
    /// (duplicate ids or abbreviations, dangling agency references,
    /// empty required fields).
    pub fn from_records(
        agencies: Vec<Agency>,
        components: Vec<AgencyComponent>,
    ) -> Result<Self, CatalogError> {
        let index: CatalogIndex = CatalogIndex::build(agencies, components)?;
        info!(
            agencies = index.agencies.len(),
            components = index.components.len(),
            "Catalog loaded"
        );
        Ok(Self {
            index: RwLock::new(index),
        })
    }

    /// Creates a store with no agencies or components.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            index: RwLock::new(CatalogIndex::default()),
        }
    }

    /// Returns the number of agencies in the catalog.
    #[must_use]
    pub fn agency_count(&self) -> usize {
        self.read().agencies.len()
    }

    /// Returns the number of agency components in the catalog.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.read().components.len()
    }

    // A poisoned lock still holds a consistent index: every write is a
    // single slot assignment.
    fn read(&self) -> RwLockReadGuard<'_, CatalogIndex> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogIndex> {
        self.index.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::empty()
    }
}
