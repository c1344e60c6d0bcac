// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Agency, AgencyComponent};

/// Validates that an agency's required fields are present.
///
/// This does NOT check uniqueness; that needs the whole catalog.
///
/// # Errors
///
/// Returns an error if:
/// - The abbreviation is empty or whitespace
/// - The name is empty or whitespace
pub fn validate_agency_fields(agency: &Agency) -> Result<(), DomainError> {
    if agency.abbreviation.trim().is_empty() {
        return Err(DomainError::InvalidAgencyAbbreviation(agency.id));
    }

    if agency.name.trim().is_empty() {
        return Err(DomainError::InvalidAgencyName(agency.id));
    }

    Ok(())
}

/// Validates that a component's required fields are present.
///
/// The owning agency reference is checked by the catalog, not here.
///
/// # Errors
///
/// Returns an error if:
/// - The abbreviation is empty or whitespace
/// - The name is empty or whitespace
pub fn validate_component_fields(component: &AgencyComponent) -> Result<(), DomainError> {
    if component.abbreviation.trim().is_empty() {
        return Err(DomainError::InvalidComponentAbbreviation(component.id));
    }

    if component.name.trim().is_empty() {
        return Err(DomainError::InvalidComponentName(component.id));
    }

    Ok(())
}
