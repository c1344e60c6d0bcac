// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::detail::ComponentDetail;
use serde::{Deserialize, Serialize};

/// Canonical identifier of an agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgencyId(i64);

impl AgencyId {
    /// Wraps a raw catalog identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw catalog identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AgencyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical identifier of an agency component.
///
/// Component identifiers are unique across the whole catalog, not just
/// within their owning agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(i64);

impl ComponentId {
    /// Wraps a raw catalog identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw catalog identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A top-level government agency.
///
/// Agencies are loaded once with the catalog and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    /// The canonical identifier.
    pub id: AgencyId,
    /// The unique abbreviation (e.g., "DOJ").
    pub abbreviation: String,
    /// The full agency name.
    pub name: String,
    /// The number of components the agency declares.
    #[serde(default)]
    pub component_count: u32,
}

impl Agency {
    /// Creates a new `Agency`.
    ///
    /// # Arguments
    ///
    /// * `id` - The canonical identifier
    /// * `abbreviation` - The unique abbreviation
    /// * `name` - The full agency name
    /// * `component_count` - The number of components the agency declares
    #[must_use]
    pub fn new(id: AgencyId, abbreviation: &str, name: &str, component_count: u32) -> Self {
        Self {
            id,
            abbreviation: abbreviation.to_string(),
            name: name.to_string(),
            component_count,
        }
    }

    /// Returns whether this agency handles requests centrally.
    ///
    /// Centralized agencies have at most one component, so reports target
    /// the agency as a whole and component filtering is skipped.
    #[must_use]
    pub const fn is_centralized(&self) -> bool {
        self.component_count <= 1
    }
}

/// A sub-unit of an agency that receives FOIA requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyComponent {
    /// The canonical identifier.
    pub id: ComponentId,
    /// The component abbreviation (e.g., "FBI").
    pub abbreviation: String,
    /// The full component name.
    pub name: String,
    /// The identifier of the owning agency.
    pub agency_id: AgencyId,
    /// Personnel and contact details, absent until fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ComponentDetail>,
}

impl AgencyComponent {
    /// Creates a new `AgencyComponent` without a detail payload.
    ///
    /// # Arguments
    ///
    /// * `id` - The canonical identifier
    /// * `abbreviation` - The component abbreviation
    /// * `name` - The full component name
    /// * `agency_id` - The identifier of the owning agency
    #[must_use]
    pub fn new(id: ComponentId, abbreviation: &str, name: &str, agency_id: AgencyId) -> Self {
        Self {
            id,
            abbreviation: abbreviation.to_string(),
            name: name.to_string(),
            agency_id,
            detail: None,
        }
    }

    /// Returns a copy of this component carrying the given detail payload.
    #[must_use]
    pub fn with_detail(mut self, detail: ComponentDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Returns whether the detail payload has been fetched.
    #[must_use]
    pub const fn has_detail(&self) -> bool {
        self.detail.is_some()
    }
}
