// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use foia_finder_catalog::CatalogError;
use foia_finder_domain::ComponentId;

/// Errors that can occur while resolving a pick or editing the filter.
///
/// None of these are fatal; every one leaves the selection unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A catalog lookup failed.
    Catalog(CatalogError),
    /// The detail fetch for a component failed.
    DetailFetchFailed {
        /// The component whose detail was requested.
        id: ComponentId,
        /// The transport's description of the failure.
        reason: String,
    },
    /// The component is not part of the current filter.
    InvalidToggle {
        /// The component that was toggled.
        id: ComponentId,
    },
}

impl CoreError {
    /// Returns whether this error is a failed catalog lookup.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::Catalog(err) => err.is_not_found(),
            _ => false,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "Catalog error: {err}"),
            Self::DetailFetchFailed { id, reason } => {
                write!(f, "Failed to fetch details for component {id}: {reason}")
            }
            Self::InvalidToggle { id } => {
                write!(f, "Component {id} is not part of the selected agency")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}
