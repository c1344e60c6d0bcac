// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::CatalogStore;
use foia_finder_domain::{
    Agency, AgencyComponent, AgencyId, ComponentDetail, ComponentId, FoiaPersonnel,
};

pub const DOJ: AgencyId = AgencyId::new(1);
pub const AMTRAK: AgencyId = AgencyId::new(2);
pub const DOD: AgencyId = AgencyId::new(3);
pub const FBI: ComponentId = ComponentId::new(10);
pub const ATF: ComponentId = ComponentId::new(11);
pub const AMTRAK_FOIA: ComponentId = ComponentId::new(20);
pub const ARMY: ComponentId = ComponentId::new(30);
pub const DEA: ComponentId = ComponentId::new(12);

pub fn create_test_agencies() -> Vec<Agency> {
    vec![
        Agency::new(DOJ, "DOJ", "Department of Justice", 3),
        Agency::new(AMTRAK, "AMTRAK", "National Railroad Passenger Corporation", 1),
        Agency::new(DOD, "DOD", "Department of Defense", 1),
    ]
}

/// Components deliberately interleave agencies so ordering tests are
/// meaningful.
pub fn create_test_components() -> Vec<AgencyComponent> {
    vec![
        AgencyComponent::new(FBI, "FBI", "Federal Bureau of Investigation", DOJ),
        AgencyComponent::new(AMTRAK_FOIA, "AMTRAK", "Amtrak FOIA Office", AMTRAK),
        AgencyComponent::new(
            ATF,
            "ATF",
            "Bureau of Alcohol, Tobacco, Firearms and Explosives",
            DOJ,
        ),
        AgencyComponent::new(ARMY, "ARMY", "Department of the Army", DOD),
        AgencyComponent::new(DEA, "DEA", "Drug Enforcement Administration", DOJ),
    ]
}

pub fn create_test_store() -> CatalogStore {
    CatalogStore::from_records(create_test_agencies(), create_test_components()).unwrap()
}

pub fn create_test_detail(officer: &str) -> ComponentDetail {
    ComponentDetail {
        foia_officers: vec![FoiaPersonnel {
            name: Some(officer.to_string()),
            title: Some(String::from("FOIA Officer")),
            email: Some(String::from("FOIA@example.gov")),
            phone: vec![String::from("202-555-0100")],
        }],
        website: Some(String::from("https://example.gov/foia")),
        ..ComponentDetail::default()
    }
}
