use super::*;

#[test]
fn default_state_shows_nothing() {
    let state = StatusState::default();
    assert!(state.current().is_none());
}

#[test]
fn show_sets_message_and_kind() {
    let mut state = StatusState::default();
    state.show(StatusKind::Success, "Signed up");
    assert_eq!(state.current(), Some(("Signed up", StatusKind::Success)));

    state.show(StatusKind::Error, "Activity full");
    assert_eq!(state.current(), Some(("Activity full", StatusKind::Error)));
}

#[test]
fn show_issues_increasing_tokens() {
    let mut state = StatusState::default();
    let first = state.show(StatusKind::Success, "one");
    let second = state.show(StatusKind::Success, "two");
    assert!(second > first);
}

#[test]
fn hide_with_current_token_hides() {
    let mut state = StatusState::default();
    let token = state.show(StatusKind::Success, "Signed up");
    assert!(state.hide_if_current(token));
    assert!(state.current().is_none());
}

#[test]
fn stale_hide_token_leaves_newer_message_visible() {
    let mut state = StatusState::default();
    let old = state.show(StatusKind::Success, "Signed up");
    state.show(StatusKind::Error, "Activity full");

    // The old message's timer fires after a new message replaced it; the
    // newer message must stay on screen.
    assert!(!state.hide_if_current(old));
    assert_eq!(state.current(), Some(("Activity full", StatusKind::Error)));
}

#[test]
fn hide_delays_are_fixed() {
    assert_eq!(SIGNUP_HIDE_DELAY, Duration::from_secs(5));
    assert_eq!(REMOVAL_HIDE_DELAY, Duration::from_secs(4));
}
