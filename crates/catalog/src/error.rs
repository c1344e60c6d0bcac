// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use foia_finder_domain::{AgencyId, ComponentId, DomainError};

/// Errors that can occur while building or querying the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No agency has the requested abbreviation.
    AgencyNotFound {
        /// The abbreviation that was looked up.
        abbreviation: String,
    },
    /// No agency has the requested identifier.
    AgencyIdNotFound(AgencyId),
    /// No component has the requested identifier.
    ComponentNotFound(ComponentId),
    /// Two agencies share an identifier.
    DuplicateAgencyId(AgencyId),
    /// Two agencies share an abbreviation.
    DuplicateAgencyAbbreviation(String),
    /// Two components share an identifier.
    DuplicateComponentId(ComponentId),
    /// A component references an agency that is not in the catalog.
    UnknownOwningAgency {
        /// The component carrying the dangling reference.
        component: ComponentId,
        /// The agency it references.
        agency: AgencyId,
    },
    /// A record failed field validation.
    InvalidRecord(DomainError),
    /// The catalog file could not be read.
    Io(String),
    /// The catalog document could not be parsed.
    SerializationError(String),
}

impl CatalogError {
    /// Returns whether this error is a failed lookup rather than a
    /// malformed catalog.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AgencyNotFound { .. } | Self::AgencyIdNotFound(_) | Self::ComponentNotFound(_)
        )
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AgencyNotFound { abbreviation } => {
                write!(f, "Agency '{abbreviation}' not found")
            }
            Self::AgencyIdNotFound(id) => write!(f, "Agency {id} not found"),
            Self::ComponentNotFound(id) => write!(f, "Agency component {id} not found"),
            Self::DuplicateAgencyId(id) => write!(f, "Duplicate agency id {id}"),
            Self::DuplicateAgencyAbbreviation(abbreviation) => {
                write!(f, "Duplicate agency abbreviation '{abbreviation}'")
            }
            Self::DuplicateComponentId(id) => write!(f, "Duplicate agency component id {id}"),
            Self::UnknownOwningAgency { component, agency } => {
                write!(
                    f,
                    "Agency component {component} references unknown agency {agency}"
                )
            }
            Self::InvalidRecord(err) => write!(f, "Invalid catalog record: {err}"),
            Self::Io(msg) => write!(f, "Catalog I/O error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Catalog parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        Self::InvalidRecord(err)
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
