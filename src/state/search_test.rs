use super::*;

fn listing(id: &str) -> PropertySummary {
    PropertySummary {
        id: id.to_owned(),
        address: format!("{id} Example Ave"),
        price: 500_000.0,
        bedrooms: 2,
        bathrooms: 1.0,
        square_feet: 900.0,
        latitude: 43.6,
        longitude: -79.4,
    }
}

#[test]
fn default_state_is_idle_and_empty() {
    let state = SearchState::default();
    assert!(state.properties.is_empty());
    assert!(!state.loading);
}

#[test]
fn begin_request_sets_loading_and_advances_generation() {
    let mut state = SearchState::default();
    let first = state.begin_request();
    let second = state.begin_request();
    assert!(state.loading);
    assert!(second > first);
}

#[test]
fn apply_results_replaces_the_whole_set() {
    let mut state = SearchState::default();
    let seq = state.begin_request();
    assert!(state.apply_results(seq, vec![listing("a"), listing("b")]));
    assert_eq!(state.properties.len(), 2);
    assert!(!state.loading);

    let seq = state.begin_request();
    assert!(state.apply_results(seq, vec![listing("c")]));
    assert_eq!(state.properties.len(), 1);
    assert_eq!(state.properties[0].id, "c");
}

#[test]
fn stale_response_is_discarded() {
    let mut state = SearchState::default();
    let stale = state.begin_request();
    let fresh = state.begin_request();

    assert!(!state.apply_results(stale, vec![listing("old")]));
    assert!(state.properties.is_empty());
    assert!(state.loading);

    assert!(state.apply_results(fresh, vec![listing("new")]));
    assert_eq!(state.properties[0].id, "new");
}

#[test]
fn failed_request_leaves_previous_results_untouched() {
    let mut state = SearchState::default();
    let seq = state.begin_request();
    assert!(state.apply_results(seq, vec![listing("kept")]));

    let seq = state.begin_request();
    state.fail_request(seq);
    assert_eq!(state.properties.len(), 1);
    assert_eq!(state.properties[0].id, "kept");
    assert!(!state.loading);
}

#[test]
fn stale_failure_does_not_clear_loading_for_newer_request() {
    let mut state = SearchState::default();
    let stale = state.begin_request();
    let _fresh = state.begin_request();
    state.fail_request(stale);
    assert!(state.loading);
}
