// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Component filter for agency reports.
//!
//! A report on a non-centralized agency can be narrowed to a subset of
//! its components. The filter is scoped to exactly one agency and only
//! ever contains ids of that agency's components.

use std::collections::BTreeSet;

use foia_finder_domain::{Agency, AgencyComponent, AgencyId, ComponentId};
use serde::Serialize;
use tracing::debug;

use crate::error::CoreError;
use crate::state::SelectionState;

/// One checkbox in the component filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCheckbox {
    /// The component this checkbox selects.
    pub id: ComponentId,
    /// The text shown next to the checkbox (the component abbreviation).
    pub label: String,
    /// A per-render unique input identifier.
    pub input_id: String,
    /// The form field name, shared by every checkbox of the agency.
    pub input_name: String,
    /// Whether the component is currently selected.
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterOption {
    id: ComponentId,
    abbreviation: String,
}

/// The checkbox selection narrowing a report to particular components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFilter {
    agency_id: AgencyId,
    options: Vec<FilterOption>,
    selected: BTreeSet<ComponentId>,
}

impl ComponentFilter {
    /// Creates an empty filter over an agency's components.
    ///
    /// # Arguments
    ///
    /// * `agency` - The agency being reported on
    /// * `components` - The agency's components, in display order
    #[must_use]
    pub fn new(agency: &Agency, components: &[AgencyComponent]) -> Self {
        Self {
            agency_id: agency.id,
            options: components
                .iter()
                .filter(|component| component.agency_id == agency.id)
                .map(|component| FilterOption {
                    id: component.id,
                    abbreviation: component.abbreviation.clone(),
                })
                .collect(),
            selected: BTreeSet::new(),
        }
    }

    /// Creates an empty filter for the current selection.
    ///
    /// Returns `None` unless the selection is a non-centralized agency.
    #[must_use]
    pub fn for_selection(state: &SelectionState) -> Option<Self> {
        let agency: &Agency = state.filterable_agency()?;
        let components: &[AgencyComponent] = state.components_of_agency()?;
        Some(Self::new(agency, components))
    }

    /// Returns the agency this filter is scoped to.
    #[must_use]
    pub const fn agency_id(&self) -> AgencyId {
        self.agency_id
    }

    /// Returns whether a component is one of this agency's components.
    #[must_use]
    pub fn offers(&self, id: ComponentId) -> bool {
        self.options.iter().any(|option| option.id == id)
    }

    /// Returns whether a component is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: ComponentId) -> bool {
        self.selected.contains(&id)
    }

    /// Returns the selected component ids.
    #[must_use]
    pub const fn selection(&self) -> &BTreeSet<ComponentId> {
        &self.selected
    }

    /// Returns the form field name shared by this agency's checkboxes.
    #[must_use]
    pub fn input_name(&self) -> String {
        format!("{}-component", self.agency_id)
    }

    /// Flips whether a component is selected.
    ///
    /// Ids that do not belong to this agency are ignored.
    ///
    /// # Returns
    ///
    /// `true` if the selection changed.
    pub fn toggle(&mut self, id: ComponentId) -> bool {
        if !self.offers(id) {
            debug!(agency = %self.agency_id, component = %id, "Ignoring toggle of foreign component");
            return false;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        true
    }

    /// Flips whether a component is selected, rejecting foreign ids.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidToggle` if the id does not belong to
    /// this agency. The selection is left unchanged.
    pub fn checked_toggle(&mut self, id: ComponentId) -> Result<(), CoreError> {
        if self.toggle(id) {
            Ok(())
        } else {
            Err(CoreError::InvalidToggle { id })
        }
    }

    /// Selects every component of the agency.
    pub fn select_all(&mut self) {
        self.selected = self.options.iter().map(|option| option.id).collect();
    }

    /// Clears the selection.
    pub fn select_none(&mut self) {
        self.selected.clear();
    }

    /// Builds one checkbox per component, in display order.
    #[must_use]
    pub fn checkboxes(&self) -> Vec<FilterCheckbox> {
        let input_name: String = self.input_name();
        self.options
            .iter()
            .map(|option| FilterCheckbox {
                id: option.id,
                label: option.abbreviation.clone(),
                input_id: format!("{}_{}", option.abbreviation, option.id),
                input_name: input_name.clone(),
                checked: self.selected.contains(&option.id),
            })
            .collect()
    }
}
