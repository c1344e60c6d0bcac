// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON catalog documents.

use std::path::Path;

use foia_finder_domain::{Agency, AgencyComponent};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::CatalogStore;
use crate::error::CatalogError;

/// The on-disk shape of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// All agencies in catalog order.
    #[serde(default)]
    pub agencies: Vec<Agency>,
    /// All agency components in catalog order.
    #[serde(default)]
    pub agency_components: Vec<AgencyComponent>,
}

impl CatalogDocument {
    /// Builds a lookup store from this document.
    ///
    /// # Errors
    ///
    /// Returns an error if the records do not form a valid catalog.
    pub fn into_store(self) -> Result<CatalogStore, CatalogError> {
        CatalogStore::from_records(self.agencies, self.agency_components)
    }
}

/// Parses a catalog document from JSON text and builds a store from it.
///
/// # Errors
///
/// Returns an error if the text is not a valid catalog document or the
/// records do not form a valid catalog.
pub fn parse_catalog(json: &str) -> Result<CatalogStore, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    document.into_store()
}

/// Reads a catalog document from a JSON file and builds a store from it.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid catalog
/// document, or the records do not form a valid catalog.
pub fn load_catalog(path: &Path) -> Result<CatalogStore, CatalogError> {
    info!(path = %path.display(), "Loading catalog");
    let json: String = std::fs::read_to_string(path)?;
    parse_catalog(&json)
}
