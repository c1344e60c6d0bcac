// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text previews of the current selection.

use std::fmt::Write as _;

use foia_finder::{FilterCheckbox, SelectionState};
use foia_finder_domain::{Agency, AgencyComponent, FoiaPersonnel};

const NOTHING_SELECTED: &str = "Not all agencies can receive FOIA requests created on FOIA.gov. \
The information for where to submit a request to those agencies will be available after you \
select an agency.";

/// Renders the preview for a selection.
#[must_use]
pub fn render_selection(state: &SelectionState) -> String {
    match state {
        SelectionState::Empty => format!("{NOTHING_SELECTED}\n"),
        SelectionState::AgencySelected {
            agency,
            components_of_agency,
        } => render_agency(agency, components_of_agency),
        SelectionState::ComponentSelected { component } => render_component(component),
    }
}

fn render_agency(agency: &Agency, components: &[AgencyComponent]) -> String {
    let mut out: String = format!("{} ({})\n", agency.name, agency.abbreviation);
    if agency.is_centralized() {
        out.push_str("Requests are handled centrally by the agency.\n");
    }
    for component in components {
        let _ = writeln!(out, "  [{}] {} - {}", component.id, component.abbreviation, component.name);
    }
    out
}

fn render_component(component: &AgencyComponent) -> String {
    let mut out: String = format!("{} ({})\n", component.name, component.abbreviation);
    let Some(detail) = component.detail.as_ref() else {
        return out;
    };

    if let Some(website) = &detail.website {
        let _ = writeln!(out, "  Website: {website}");
    }
    if let Some(email) = &detail.email {
        let _ = writeln!(out, "  Submit by email: {}", email.to_lowercase());
    }
    if let Some(address) = &detail.submission_address {
        let _ = writeln!(out, "  Submit by mail: {address}");
    }
    for personnel in detail.all_personnel() {
        for line in render_personnel(personnel) {
            let _ = writeln!(out, "  {line}");
        }
    }
    out
}

/// Renders one contact as display lines: name, phones, then email.
#[must_use]
pub fn render_personnel(personnel: &FoiaPersonnel) -> Vec<String> {
    personnel
        .display_name()
        .into_iter()
        .chain(personnel.phone.iter().cloned())
        .chain(personnel.normalized_email())
        .collect()
}

/// Renders the component filter checkboxes.
#[must_use]
pub fn render_checkboxes(checkboxes: &[FilterCheckbox]) -> String {
    let mut out: String = String::new();
    for checkbox in checkboxes {
        let mark: char = if checkbox.checked { 'x' } else { ' ' };
        let _ = writeln!(
            out,
            "  [{mark}] {} ({}={})",
            checkbox.label, checkbox.input_name, checkbox.id
        );
    }
    out
}
