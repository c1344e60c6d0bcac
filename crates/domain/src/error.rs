// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{AgencyId, ComponentId};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Agency abbreviation is empty.
    InvalidAgencyAbbreviation(AgencyId),
    /// Agency name is empty.
    InvalidAgencyName(AgencyId),
    /// Component abbreviation is empty.
    InvalidComponentAbbreviation(ComponentId),
    /// Component name is empty.
    InvalidComponentName(ComponentId),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAgencyAbbreviation(id) => {
                write!(f, "Agency {id} has an empty abbreviation")
            }
            Self::InvalidAgencyName(id) => write!(f, "Agency {id} has an empty name"),
            Self::InvalidComponentAbbreviation(id) => {
                write!(f, "Component {id} has an empty abbreviation")
            }
            Self::InvalidComponentName(id) => write!(f, "Component {id} has an empty name"),
        }
    }
}

impl std::error::Error for DomainError {}
