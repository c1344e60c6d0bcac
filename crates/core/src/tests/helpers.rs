// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use foia_finder_catalog::CatalogStore;
use foia_finder_domain::{
    Agency, AgencyComponent, AgencyId, ComponentDetail, ComponentId, FoiaPersonnel,
};
use tokio::sync::Notify;

use crate::{DetailFetcher, DetailFuture, FetchError, SelectionResolver};

pub const DOJ: AgencyId = AgencyId::new(1);
pub const DOD: AgencyId = AgencyId::new(2);
pub const ACUS: AgencyId = AgencyId::new(3);
pub const FBI: ComponentId = ComponentId::new(10);
pub const ATF: ComponentId = ComponentId::new(11);
pub const ARMY: ComponentId = ComponentId::new(20);
pub const UNKNOWN: ComponentId = ComponentId::new(999);

/// DOJ has two components, DOD is centralized with one, ACUS has none.
pub fn create_test_catalog() -> Arc<CatalogStore> {
    let agencies: Vec<Agency> = vec![
        Agency::new(DOJ, "DOJ", "Department of Justice", 2),
        Agency::new(DOD, "DOD", "Department of Defense", 1),
        Agency::new(ACUS, "ACUS", "Administrative Conference of the United States", 0),
    ];
    let components: Vec<AgencyComponent> = vec![
        AgencyComponent::new(FBI, "FBI", "Federal Bureau of Investigation", DOJ),
        AgencyComponent::new(
            ATF,
            "ATF",
            "Bureau of Alcohol, Tobacco, Firearms and Explosives",
            DOJ,
        ),
        AgencyComponent::new(ARMY, "ARMY", "Department of the Army", DOD),
    ];
    Arc::new(CatalogStore::from_records(agencies, components).unwrap())
}

pub fn create_test_detail(officer: &str) -> ComponentDetail {
    ComponentDetail {
        foia_officers: vec![FoiaPersonnel {
            name: Some(officer.to_string()),
            title: Some(String::from("FOIA Officer")),
            email: Some(String::from("FOIA@example.gov")),
            phone: vec![String::from("202-555-0100")],
        }],
        ..ComponentDetail::default()
    }
}

/// A detail transport double.
///
/// Serves details from a fixed map, counts calls, and can hold every
/// fetch until its gate is opened. The first `failures` calls fail.
#[derive(Default)]
pub struct StubFetcher {
    details: HashMap<ComponentId, ComponentDetail>,
    calls: AtomicUsize,
    failures: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
            .with_detail(FBI, create_test_detail("Jane Roe"))
            .with_detail(ATF, create_test_detail("John Doe"))
            .with_detail(ARMY, create_test_detail("Pat Smith"))
    }

    pub fn with_detail(mut self, id: ComponentId, detail: ComponentDetail) -> Self {
        self.details.insert(id, detail);
        self
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn failing_first(self, failures: usize) -> Self {
        self.failures.store(failures, Ordering::SeqCst);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DetailFetcher for StubFetcher {
    fn fetch_detail(&self, id: ComponentId) -> DetailFuture {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let fail: bool = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        let result: Result<ComponentDetail, FetchError> = if fail {
            Err(FetchError::Transport(String::from("connection reset")))
        } else {
            self.details
                .get(&id)
                .cloned()
                .ok_or(FetchError::Unavailable(id))
        };
        let gate: Option<Arc<Notify>> = self.gate.clone();
        Box::pin(async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            result
        })
    }
}

pub fn create_test_resolver() -> SelectionResolver<StubFetcher> {
    SelectionResolver::new(create_test_catalog(), StubFetcher::new())
}
