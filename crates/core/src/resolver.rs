// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The selection state machine.
//!
//! Every accepted pick is issued a ticket from a monotonically
//! increasing sequence. A pick may only commit while its ticket is the
//! latest one issued, so a slow detail fetch can never overwrite a
//! selection made after it was requested.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use foia_finder_catalog::CatalogStore;
use foia_finder_domain::{Agency, AgencyComponent, ComponentDetail, ComponentId};
use futures::FutureExt;
use futures::future::Shared;
use tracing::{debug, info, warn};

use crate::command::Pick;
use crate::error::CoreError;
use crate::fetch::{DetailFetcher, DetailFuture, FetchError};
use crate::filter::{ComponentFilter, FilterCheckbox};
use crate::state::SelectionState;

type SharedFetch = Shared<DetailFuture>;

/// Bookkeeping guarded by the resolver's mutex.
///
/// The mutex is never held across an `.await`.
#[derive(Default)]
struct ResolverInner {
    state: SelectionState,
    filter: Option<ComponentFilter>,
    latest_ticket: u64,
    in_flight: HashMap<ComponentId, SharedFetch>,
}

impl ResolverInner {
    fn issue_ticket(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.latest_ticket
    }

    /// Replaces the selection. Any previous filter is discarded, and a
    /// fresh empty one is started if the new selection is a
    /// non-centralized agency.
    fn commit(&mut self, state: SelectionState) {
        self.filter = ComponentFilter::for_selection(&state);
        self.state = state;
    }
}

fn lock(inner: &Mutex<ResolverInner>) -> MutexGuard<'_, ResolverInner> {
    // Every critical section leaves the bookkeeping consistent, so a
    // poisoned lock is still usable.
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The synchronous result of accepting a pick.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// The pick was resolved from the catalog and is now the selection.
    Committed(SelectionState),
    /// The pick needs a detail fetch before it can commit.
    Pending(PendingResolution<'a>),
}

/// How a resolution finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The pick is now the selection.
    Committed(SelectionState),
    /// A later pick was accepted first; this one was discarded.
    Superseded,
}

/// A component pick waiting on its detail fetch.
#[must_use = "a pending resolution does nothing until settled"]
pub struct PendingResolution<'a> {
    catalog: &'a CatalogStore,
    inner: &'a Mutex<ResolverInner>,
    ticket: u64,
    id: ComponentId,
    fetch: SharedFetch,
}

impl std::fmt::Debug for PendingResolution<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingResolution")
            .field("ticket", &self.ticket)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl PendingResolution<'_> {
    /// Returns the ticket issued to this pick.
    #[must_use]
    pub const fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Returns the component being fetched.
    #[must_use]
    pub const fn component_id(&self) -> ComponentId {
        self.id
    }

    /// Waits for the detail fetch and commits the selection if this pick
    /// is still the latest one.
    ///
    /// A fetched payload is merged into the catalog even when the pick
    /// has been superseded, so a later pick of the same component
    /// resolves without fetching again.
    ///
    /// # Returns
    ///
    /// * `Ok(ResolveOutcome::Committed)` if the selection changed
    /// * `Ok(ResolveOutcome::Superseded)` if a later pick won, whatever
    ///   the fetch's result
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DetailFetchFailed` if the fetch failed and this
    /// pick is still the latest. The selection is left unchanged.
    pub async fn settle(self) -> Result<ResolveOutcome, CoreError> {
        let fetched: Result<ComponentDetail, FetchError> = self.fetch.clone().await;

        let merged: Result<AgencyComponent, CoreError> = match fetched {
            Ok(detail) => self
                .catalog
                .merge_component_detail(self.id, detail)
                .map_err(CoreError::from),
            Err(err) => Err(CoreError::DetailFetchFailed {
                id: self.id,
                reason: err.to_string(),
            }),
        };

        let mut inner = lock(self.inner);
        if inner
            .in_flight
            .get(&self.id)
            .is_some_and(|stored| stored.ptr_eq(&self.fetch))
        {
            inner.in_flight.remove(&self.id);
        }

        if inner.latest_ticket != self.ticket {
            debug!(
                ticket = self.ticket,
                latest = inner.latest_ticket,
                component = %self.id,
                "Discarding superseded component pick"
            );
            return Ok(ResolveOutcome::Superseded);
        }

        let component: AgencyComponent = merged.inspect_err(|err| {
            warn!(ticket = self.ticket, component = %self.id, %err, "Component pick failed");
        })?;
        info!(
            ticket = self.ticket,
            component = %component.abbreviation,
            "Component selected"
        );
        let state: SelectionState = SelectionState::ComponentSelected { component };
        inner.commit(state.clone());
        Ok(ResolveOutcome::Committed(state))
    }
}

/// Owns the current selection and resolves picks against the catalog.
///
/// Agency picks and picks of components whose detail is already loaded
/// resolve synchronously. Other component picks fetch the detail first;
/// concurrent picks of the same component share a single fetch.
pub struct SelectionResolver<F> {
    catalog: Arc<CatalogStore>,
    fetcher: F,
    inner: Mutex<ResolverInner>,
}

impl<F> std::fmt::Debug for SelectionResolver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionResolver")
            .field("state", &lock(&self.inner).state)
            .finish_non_exhaustive()
    }
}

impl<F: DetailFetcher> SelectionResolver<F> {
    /// Creates a resolver with an empty selection.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The loaded catalog
    /// * `fetcher` - The transport used for missing detail payloads
    #[must_use]
    pub fn new(catalog: Arc<CatalogStore>, fetcher: F) -> Self {
        Self {
            catalog,
            fetcher,
            inner: Mutex::new(ResolverInner::default()),
        }
    }

    /// Returns the catalog this resolver reads from.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Returns the detail transport.
    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Accepts a pick.
    ///
    /// The pick is looked up in the catalog and issued a ticket,
    /// superseding every earlier pick. If no fetch is needed the new
    /// selection is committed before this returns.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Catalog` if the pick names an agency or
    /// component that is not in the catalog. A rejected pick is not
    /// issued a ticket and supersedes nothing.
    pub fn begin_resolve(&self, pick: Pick) -> Result<Resolution<'_>, CoreError> {
        match pick {
            Pick::Agency { abbreviation } => {
                let agency: Agency = self.catalog.get_agency(&abbreviation)?;
                let components_of_agency: Vec<AgencyComponent> =
                    self.catalog.get_agency_components_for_agency(agency.id);

                let mut inner = lock(&self.inner);
                let ticket: u64 = inner.issue_ticket();
                info!(
                    ticket,
                    agency = %agency.abbreviation,
                    components = components_of_agency.len(),
                    "Agency selected"
                );
                let state: SelectionState = SelectionState::AgencySelected {
                    agency,
                    components_of_agency,
                };
                inner.commit(state.clone());
                Ok(Resolution::Committed(state))
            }
            Pick::Component { id } => {
                let component: AgencyComponent = self.catalog.get_agency_component(id)?;

                let mut inner = lock(&self.inner);
                let ticket: u64 = inner.issue_ticket();

                if component.has_detail() {
                    info!(
                        ticket,
                        component = %component.abbreviation,
                        "Component selected"
                    );
                    let state: SelectionState = SelectionState::ComponentSelected { component };
                    inner.commit(state.clone());
                    return Ok(Resolution::Committed(state));
                }

                let outstanding: Option<SharedFetch> = inner
                    .in_flight
                    .get(&id)
                    .filter(|fetch| fetch.peek().is_none())
                    .cloned();
                let fetch: SharedFetch = if let Some(existing) = outstanding {
                    debug!(ticket, component = %id, "Joining outstanding detail fetch");
                    existing
                } else {
                    debug!(ticket, component = %id, "Fetching component detail");
                    let fetch: SharedFetch = self.fetcher.fetch_detail(id).shared();
                    inner.in_flight.insert(id, fetch.clone());
                    fetch
                };

                Ok(Resolution::Pending(PendingResolution {
                    catalog: &self.catalog,
                    inner: &self.inner,
                    ticket,
                    id,
                    fetch,
                }))
            }
        }
    }

    /// Resolves a pick, waiting for any detail fetch it needs.
    ///
    /// # Errors
    ///
    /// Returns an error if the pick is not in the catalog, or if its
    /// detail fetch failed while it was still the latest pick.
    pub async fn resolve(&self, pick: Pick) -> Result<ResolveOutcome, CoreError> {
        match self.begin_resolve(pick)? {
            Resolution::Committed(state) => Ok(ResolveOutcome::Committed(state)),
            Resolution::Pending(pending) => pending.settle().await,
        }
    }

    /// Returns a snapshot of the current selection.
    #[must_use]
    pub fn selection(&self) -> SelectionState {
        lock(&self.inner).state.clone()
    }

    /// Returns the selected agency, if an agency is current.
    #[must_use]
    pub fn selected_agency(&self) -> Option<Agency> {
        lock(&self.inner).state.agency().cloned()
    }

    /// Returns the selected component, if a component is current.
    #[must_use]
    pub fn selected_component(&self) -> Option<AgencyComponent> {
        lock(&self.inner).state.component().cloned()
    }

    /// Returns whether a detail fetch for a component is outstanding.
    #[must_use]
    pub fn is_fetching(&self, id: ComponentId) -> bool {
        lock(&self.inner)
            .in_flight
            .get(&id)
            .is_some_and(|fetch| fetch.peek().is_none())
    }

    /// Returns whether the current selection offers a component filter.
    #[must_use]
    pub fn has_filter(&self) -> bool {
        lock(&self.inner).filter.is_some()
    }

    /// Returns a snapshot of the component filter, if one is offered.
    #[must_use]
    pub fn filter(&self) -> Option<ComponentFilter> {
        lock(&self.inner).filter.clone()
    }

    /// Returns the filter checkboxes, or nothing when no filter is offered.
    #[must_use]
    pub fn filter_checkboxes(&self) -> Vec<FilterCheckbox> {
        lock(&self.inner)
            .filter
            .as_ref()
            .map(ComponentFilter::checkboxes)
            .unwrap_or_default()
    }

    /// Returns the selected filter component ids.
    #[must_use]
    pub fn filter_selection(&self) -> BTreeSet<ComponentId> {
        lock(&self.inner)
            .filter
            .as_ref()
            .map(|filter| filter.selection().clone())
            .unwrap_or_default()
    }

    /// Flips a component in the filter, ignoring ids outside it.
    ///
    /// # Returns
    ///
    /// `true` if the filter changed.
    pub fn toggle_component(&self, id: ComponentId) -> bool {
        lock(&self.inner)
            .filter
            .as_mut()
            .is_some_and(|filter| filter.toggle(id))
    }

    /// Flips a component in the filter, rejecting ids outside it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidToggle` if no filter is offered or the
    /// component does not belong to the selected agency.
    pub fn checked_toggle_component(&self, id: ComponentId) -> Result<(), CoreError> {
        lock(&self.inner)
            .filter
            .as_mut()
            .ok_or(CoreError::InvalidToggle { id })?
            .checked_toggle(id)
    }

    /// Selects every component of the selected agency.
    pub fn select_all_components(&self) {
        if let Some(filter) = lock(&self.inner).filter.as_mut() {
            filter.select_all();
        }
    }

    /// Clears the filter selection.
    pub fn select_no_components(&self) {
        if let Some(filter) = lock(&self.inner).filter.as_mut() {
            filter.select_none();
        }
    }
}
