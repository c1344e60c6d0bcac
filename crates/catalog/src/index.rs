// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory indexes over the loaded catalog.

use std::collections::HashMap;
use std::sync::Arc;

use foia_finder_domain::{
    Agency, AgencyComponent, AgencyId, ComponentId, validate_agency_fields,
    validate_component_fields,
};
use tracing::warn;

use crate::error::CatalogError;

/// The indexed catalog held behind the store's lock.
///
/// Components are stored as `Arc`s so a detail merge swaps the whole
/// entity in one assignment.
#[derive(Debug, Default)]
pub(crate) struct CatalogIndex {
    /// Agencies in catalog order.
    pub(crate) agencies: Vec<Agency>,
    /// Position in `agencies` keyed by abbreviation.
    pub(crate) agency_by_abbreviation: HashMap<String, usize>,
    /// Position in `agencies` keyed by id.
    pub(crate) agency_by_id: HashMap<AgencyId, usize>,
    /// Components in catalog order.
    pub(crate) components: Vec<Arc<AgencyComponent>>,
    /// Position in `components` keyed by id.
    pub(crate) component_by_id: HashMap<ComponentId, usize>,
    /// Positions in `components` grouped by owning agency, in catalog order.
    pub(crate) components_by_agency: HashMap<AgencyId, Vec<usize>>,
}

impl CatalogIndex {
    /// Builds the indexes, rejecting malformed catalogs.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any record fails field validation
    /// - Two agencies share an id or an abbreviation
    /// - Two components share an id
    /// - A component references an agency not in `agencies`
    pub(crate) fn build(
        agencies: Vec<Agency>,
        components: Vec<AgencyComponent>,
    ) -> Result<Self, CatalogError> {
        let mut index: Self = Self::default();

        for agency in agencies {
            validate_agency_fields(&agency)?;

            let position: usize = index.agencies.len();
            if index.agency_by_id.insert(agency.id, position).is_some() {
                return Err(CatalogError::DuplicateAgencyId(agency.id));
            }
            if index
                .agency_by_abbreviation
                .insert(agency.abbreviation.clone(), position)
                .is_some()
            {
                return Err(CatalogError::DuplicateAgencyAbbreviation(
                    agency.abbreviation,
                ));
            }
            index.agencies.push(agency);
        }

        for component in components {
            validate_component_fields(&component)?;

            if !index.agency_by_id.contains_key(&component.agency_id) {
                return Err(CatalogError::UnknownOwningAgency {
                    component: component.id,
                    agency: component.agency_id,
                });
            }

            let position: usize = index.components.len();
            if index.component_by_id.insert(component.id, position).is_some() {
                return Err(CatalogError::DuplicateComponentId(component.id));
            }
            index
                .components_by_agency
                .entry(component.agency_id)
                .or_default()
                .push(position);
            index.components.push(Arc::new(component));
        }

        index.warn_on_count_mismatch();
        Ok(index)
    }

    /// Logs agencies whose declared component count disagrees with the
    /// components actually loaded for them.
    fn warn_on_count_mismatch(&self) {
        for agency in &self.agencies {
            let loaded: usize = self
                .components_by_agency
                .get(&agency.id)
                .map_or(0, Vec::len);
            if usize::try_from(agency.component_count).ok() != Some(loaded) {
                warn!(
                    agency = %agency.abbreviation,
                    declared = agency.component_count,
                    loaded,
                    "Agency component count does not match loaded components"
                );
            }
        }
    }
}
