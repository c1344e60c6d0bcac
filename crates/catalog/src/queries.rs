// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog lookups.
//!
//! Every lookup of a missing key fails with a distinct not-found error
//! instead of a placeholder entity. Listing queries return an empty
//! vector when nothing matches.

use foia_finder_domain::{Agency, AgencyComponent, AgencyId, ComponentId};

use crate::CatalogStore;
use crate::error::CatalogError;

impl CatalogStore {
    /// Looks up an agency by its abbreviation.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AgencyNotFound` if no agency has this abbreviation.
    pub fn get_agency(&self, abbreviation: &str) -> Result<Agency, CatalogError> {
        let index = self.read();
        index
            .agency_by_abbreviation
            .get(abbreviation)
            .map(|&position| index.agencies[position].clone())
            .ok_or_else(|| CatalogError::AgencyNotFound {
                abbreviation: abbreviation.to_string(),
            })
    }

    /// Looks up an agency by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AgencyIdNotFound` if no agency has this id.
    pub fn get_agency_by_id(&self, id: AgencyId) -> Result<Agency, CatalogError> {
        let index = self.read();
        index
            .agency_by_id
            .get(&id)
            .map(|&position| index.agencies[position].clone())
            .ok_or(CatalogError::AgencyIdNotFound(id))
    }

    /// Looks up an agency component by its identifier.
    ///
    /// The returned copy carries the detail payload if one has been merged.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ComponentNotFound` if no component has this id.
    pub fn get_agency_component(&self, id: ComponentId) -> Result<AgencyComponent, CatalogError> {
        let index = self.read();
        index
            .component_by_id
            .get(&id)
            .map(|&position| AgencyComponent::clone(&index.components[position]))
            .ok_or(CatalogError::ComponentNotFound(id))
    }

    /// Returns all components owned by an agency, in catalog order.
    ///
    /// An agency with no components (or an unknown agency id) yields an
    /// empty vector.
    #[must_use]
    pub fn get_agency_components_for_agency(&self, agency_id: AgencyId) -> Vec<AgencyComponent> {
        let index = self.read();
        index
            .components_by_agency
            .get(&agency_id)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&position| AgencyComponent::clone(&index.components[position]))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns every agency, in catalog order.
    #[must_use]
    pub fn agencies(&self) -> Vec<Agency> {
        self.read().agencies.clone()
    }
}
