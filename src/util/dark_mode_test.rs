#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn preference_defaults_to_light_outside_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_round_trips() {
    let enabled = toggle(false);
    assert!(enabled);
    assert!(!toggle(enabled));
}

#[test]
fn apply_has_no_browser_to_touch() {
    // No document outside hydrate; both calls must be safe no-ops.
    apply(true);
    apply(false);
}
