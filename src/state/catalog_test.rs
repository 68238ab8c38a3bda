use super::*;
use crate::net::types::Activity;

fn sample_catalog(names: &[&str]) -> ActivityCatalog {
    names
        .iter()
        .map(|name| {
            (
                (*name).to_owned(),
                Activity {
                    description: "d".to_owned(),
                    schedule: "s".to_owned(),
                    max_participants: 10,
                    participants: Vec::new(),
                },
            )
        })
        .collect::<Vec<_>>()
        .into()
}

// =============================================================
// Defaults and refresh bookkeeping
// =============================================================

#[test]
fn default_state_has_no_snapshot() {
    let state = CatalogState::default();
    assert!(state.catalog().is_none());
    assert!(state.load_error().is_none());
    assert!(!state.loading());
}

#[test]
fn begin_refresh_marks_loading_and_issues_increasing_tokens() {
    let mut state = CatalogState::default();
    let first = state.begin_refresh();
    assert!(state.loading());
    let second = state.begin_refresh();
    assert!(second > first);
}

// =============================================================
// Snapshot application
// =============================================================

#[test]
fn latest_response_is_applied() {
    let mut state = CatalogState::default();
    let token = state.begin_refresh();
    assert!(state.apply_catalog(token, sample_catalog(&["Chess"])));
    assert!(!state.loading());
    let applied = state.catalog().expect("snapshot should be applied");
    assert_eq!(applied.names().collect::<Vec<_>>(), ["Chess"]);
}

#[test]
fn stale_response_is_dropped() {
    let mut state = CatalogState::default();
    let stale = state.begin_refresh();
    let fresh = state.begin_refresh();

    // The superseded refresh answers last in wall-clock terms but must not
    // overwrite the newer one, in either arrival order.
    assert!(state.apply_catalog(fresh, sample_catalog(&["Fresh"])));
    assert!(!state.apply_catalog(stale, sample_catalog(&["Stale"])));

    let applied = state.catalog().expect("snapshot should be applied");
    assert_eq!(applied.names().collect::<Vec<_>>(), ["Fresh"]);
}

#[test]
fn reapplied_snapshot_replaces_instead_of_appending() {
    let mut state = CatalogState::default();
    let token = state.begin_refresh();
    assert!(state.apply_catalog(token, sample_catalog(&["Chess", "Art"])));

    let token = state.begin_refresh();
    assert!(state.apply_catalog(token, sample_catalog(&["Chess", "Art"])));

    // Idempotent refresh: same snapshot twice, no duplicate entries.
    let applied = state.catalog().expect("snapshot should be applied");
    assert_eq!(applied.names().collect::<Vec<_>>(), ["Chess", "Art"]);
}

// =============================================================
// Load failures
// =============================================================

#[test]
fn failure_keeps_prior_snapshot() {
    let mut state = CatalogState::default();
    let token = state.begin_refresh();
    assert!(state.apply_catalog(token, sample_catalog(&["Chess"])));

    let token = state.begin_refresh();
    assert!(state.apply_load_failure(token, "Failed to load activities. Please try again later."));

    assert!(state.catalog().is_some(), "prior snapshot must survive a failed refresh");
    assert_eq!(
        state.load_error(),
        Some("Failed to load activities. Please try again later.")
    );
    assert!(!state.loading());
}

#[test]
fn stale_failure_is_dropped() {
    let mut state = CatalogState::default();
    let stale = state.begin_refresh();
    let fresh = state.begin_refresh();

    assert!(state.apply_catalog(fresh, sample_catalog(&["Chess"])));
    assert!(!state.apply_load_failure(stale, "boom"));
    assert!(state.load_error().is_none());
}

#[test]
fn successful_refresh_clears_prior_error() {
    let mut state = CatalogState::default();
    let token = state.begin_refresh();
    assert!(state.apply_load_failure(token, "boom"));

    let token = state.begin_refresh();
    assert!(state.apply_catalog(token, sample_catalog(&["Chess"])));
    assert!(state.load_error().is_none());
}
