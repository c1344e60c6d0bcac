// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use foia_finder_domain::{Agency, AgencyComponent};

/// The current selection.
///
/// Exactly one variant holds at a time. A transition always replaces the
/// whole value, so no field of a previous selection survives into the
/// next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing has been chosen yet.
    #[default]
    Empty,
    /// An agency is current.
    AgencySelected {
        /// The selected agency.
        agency: Agency,
        /// The agency's components, in catalog order.
        components_of_agency: Vec<AgencyComponent>,
    },
    /// A single component is current.
    ///
    /// The component's detail payload is always present in this state.
    ComponentSelected {
        /// The selected component.
        component: AgencyComponent,
    },
}

impl SelectionState {
    /// Returns whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the selected agency, if an agency is current.
    #[must_use]
    pub const fn agency(&self) -> Option<&Agency> {
        match self {
            Self::AgencySelected { agency, .. } => Some(agency),
            _ => None,
        }
    }

    /// Returns the selected agency's components, if an agency is current.
    #[must_use]
    pub fn components_of_agency(&self) -> Option<&[AgencyComponent]> {
        match self {
            Self::AgencySelected {
                components_of_agency,
                ..
            } => Some(components_of_agency.as_slice()),
            _ => None,
        }
    }

    /// Returns the selected component, if a component is current.
    #[must_use]
    pub const fn component(&self) -> Option<&AgencyComponent> {
        match self {
            Self::ComponentSelected { component } => Some(component),
            _ => None,
        }
    }

    /// Returns the selected agency if it can be narrowed by component.
    ///
    /// Centralized agencies are reported on as a whole and never offer
    /// a component filter.
    #[must_use]
    pub fn filterable_agency(&self) -> Option<&Agency> {
        self.agency().filter(|agency| !agency.is_centralized())
    }
}
