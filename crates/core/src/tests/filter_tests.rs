// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use crate::tests::helpers::{
    ARMY, ATF, DOJ, FBI, create_test_catalog, create_test_resolver,
};
use crate::{ComponentFilter, CoreError, FilterCheckbox, Pick, SelectionState};
use foia_finder_domain::{Agency, AgencyComponent, ComponentId};

fn create_doj_filter() -> ComponentFilter {
    let catalog = create_test_catalog();
    let agency: Agency = catalog.get_agency("DOJ").unwrap();
    let components: Vec<AgencyComponent> = catalog.get_agency_components_for_agency(agency.id);
    ComponentFilter::new(&agency, &components)
}

fn set(ids: &[ComponentId]) -> BTreeSet<ComponentId> {
    ids.iter().copied().collect()
}

#[test]
fn test_new_filter_is_empty() {
    let filter: ComponentFilter = create_doj_filter();
    assert_eq!(filter.agency_id(), DOJ);
    assert!(filter.selection().is_empty());
}

#[test]
fn test_toggle_adds_then_removes() {
    let mut filter: ComponentFilter = create_doj_filter();

    assert!(filter.toggle(FBI));
    assert_eq!(filter.selection(), &set(&[FBI]));
    assert!(filter.is_selected(FBI));

    assert!(filter.toggle(FBI));
    assert!(filter.selection().is_empty());
}

#[test]
fn test_toggle_is_its_own_inverse() {
    let mut filter: ComponentFilter = create_doj_filter();
    filter.toggle(ATF);
    let before: BTreeSet<ComponentId> = filter.selection().clone();

    filter.toggle(FBI);
    filter.toggle(FBI);

    assert_eq!(filter.selection(), &before);
}

#[test]
fn test_toggle_foreign_component_is_ignored() {
    let mut filter: ComponentFilter = create_doj_filter();
    filter.toggle(FBI);

    assert!(!filter.toggle(ARMY));
    assert_eq!(filter.selection(), &set(&[FBI]));
}

#[test]
fn test_checked_toggle_rejects_foreign_component() {
    let mut filter: ComponentFilter = create_doj_filter();

    assert_eq!(
        filter.checked_toggle(ARMY),
        Err(CoreError::InvalidToggle { id: ARMY })
    );
    assert!(filter.selection().is_empty());
    assert_eq!(filter.checked_toggle(ATF), Ok(()));
    assert!(filter.is_selected(ATF));
}

#[test]
fn test_select_all_selects_every_component() {
    let mut filter: ComponentFilter = create_doj_filter();
    filter.select_all();
    assert_eq!(filter.selection(), &set(&[FBI, ATF]));
}

#[test]
fn test_select_all_then_none_is_empty() {
    let mut filter: ComponentFilter = create_doj_filter();
    filter.select_all();
    filter.select_none();
    assert!(filter.selection().is_empty());
}

#[test]
fn test_checkboxes_describe_each_component() {
    let mut filter: ComponentFilter = create_doj_filter();
    filter.toggle(ATF);

    let checkboxes: Vec<FilterCheckbox> = filter.checkboxes();

    assert_eq!(
        checkboxes,
        vec![
            FilterCheckbox {
                id: FBI,
                label: String::from("FBI"),
                input_id: String::from("FBI_10"),
                input_name: String::from("1-component"),
                checked: false,
            },
            FilterCheckbox {
                id: ATF,
                label: String::from("ATF"),
                input_id: String::from("ATF_11"),
                input_name: String::from("1-component"),
                checked: true,
            },
        ]
    );
}

#[test]
fn test_filter_ignores_components_of_other_agencies() {
    let catalog = create_test_catalog();
    let agency: Agency = catalog.get_agency("DOJ").unwrap();
    let mut components: Vec<AgencyComponent> = catalog.get_agency_components_for_agency(agency.id);
    components.push(catalog.get_agency_component(ARMY).unwrap());

    let mut filter: ComponentFilter = ComponentFilter::new(&agency, &components);
    filter.select_all();

    assert!(!filter.offers(ARMY));
    assert_eq!(filter.selection(), &set(&[FBI, ATF]));
}

#[test]
fn test_no_filter_for_centralized_agency() {
    let catalog = create_test_catalog();
    let agency: Agency = catalog.get_agency("DOD").unwrap();
    let state: SelectionState = SelectionState::AgencySelected {
        components_of_agency: catalog.get_agency_components_for_agency(agency.id),
        agency,
    };
    assert!(ComponentFilter::for_selection(&state).is_none());
    assert!(ComponentFilter::for_selection(&SelectionState::Empty).is_none());
}

#[test]
fn test_doj_toggle_then_select_all() {
    let resolver = create_test_resolver();
    resolver.begin_resolve(Pick::agency("DOJ")).unwrap();

    assert!(resolver.toggle_component(FBI));
    assert_eq!(resolver.filter_selection(), set(&[FBI]));

    resolver.select_all_components();
    assert_eq!(resolver.filter_selection(), set(&[FBI, ATF]));
}

#[test]
fn test_agency_change_resets_filter() {
    let resolver = create_test_resolver();
    resolver.begin_resolve(Pick::agency("DOJ")).unwrap();
    resolver.select_all_components();

    resolver.begin_resolve(Pick::agency("DOJ")).unwrap();

    assert!(resolver.has_filter());
    assert!(resolver.filter_selection().is_empty());
}

#[test]
fn test_switching_to_centralized_agency_drops_filter() {
    let resolver = create_test_resolver();
    resolver.begin_resolve(Pick::agency("DOJ")).unwrap();
    resolver.toggle_component(FBI);

    resolver.begin_resolve(Pick::agency("DOD")).unwrap();

    assert!(!resolver.has_filter());
    assert!(resolver.filter_checkboxes().is_empty());
    assert!(!resolver.toggle_component(ARMY));
    assert_eq!(
        resolver.checked_toggle_component(ARMY),
        Err(CoreError::InvalidToggle { id: ARMY })
    );
}

#[tokio::test]
async fn test_component_selection_drops_filter() {
    let resolver = create_test_resolver();
    resolver.begin_resolve(Pick::agency("DOJ")).unwrap();
    resolver.toggle_component(FBI);

    resolver.resolve(Pick::component(ATF)).await.unwrap();

    assert!(!resolver.has_filter());
    assert!(resolver.filter_selection().is_empty());
}

#[test]
fn test_resolver_filter_round_trip() {
    let resolver = create_test_resolver();
    resolver.begin_resolve(Pick::agency("DOJ")).unwrap();

    resolver.checked_toggle_component(ATF).unwrap();
    let checked: Vec<ComponentId> = resolver
        .filter_checkboxes()
        .into_iter()
        .filter(|checkbox| checkbox.checked)
        .map(|checkbox| checkbox.id)
        .collect();
    assert_eq!(checked, vec![ATF]);

    resolver.select_no_components();
    assert!(resolver.filter().unwrap().selection().is_empty());
}
