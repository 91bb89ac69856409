use super::*;

use crate::net::http::HttpClient;

// =============================================================
// Route classification
// =============================================================

#[test]
fn dashboard_is_protected() {
    assert_eq!(classify(DASHBOARD), RouteClass::Protected);
}

#[test]
fn login_and_register_are_auth_entries() {
    assert_eq!(classify(LOGIN), RouteClass::AuthEntry);
    assert_eq!(classify(REGISTER), RouteClass::AuthEntry);
}

#[test]
fn landing_and_share_links_are_neutral() {
    assert_eq!(classify(LANDING), RouteClass::Neutral);
    assert_eq!(classify("/share/abc123"), RouteClass::Neutral);
}

#[test]
fn trailing_slashes_do_not_change_the_class() {
    assert_eq!(classify("/dashboard/"), RouteClass::Protected);
    assert_eq!(classify("/login/"), RouteClass::AuthEntry);
}

#[test]
fn unknown_paths_are_neutral() {
    assert_eq!(classify("/no-such-page"), RouteClass::Neutral);
}

#[test]
fn share_prefix_matches_share_routes() {
    assert!("/share/abc123".starts_with(SHARE_PREFIX));
}

// =============================================================
// Guard decision matrix
// =============================================================

#[test]
fn unauthenticated_protected_redirects_to_login() {
    assert_eq!(
        decide(RouteClass::Protected, false),
        GuardOutcome::Redirect(LOGIN)
    );
}

#[test]
fn authenticated_protected_is_allowed() {
    // Precedence: the protected-route rule governs even though the route is
    // not an auth entry; no dashboard bounce applies.
    assert_eq!(decide(RouteClass::Protected, true), GuardOutcome::Allow);
}

#[test]
fn authenticated_auth_entry_redirects_to_dashboard() {
    assert_eq!(
        decide(RouteClass::AuthEntry, true),
        GuardOutcome::Redirect(DASHBOARD)
    );
}

#[test]
fn unauthenticated_auth_entry_is_allowed() {
    assert_eq!(decide(RouteClass::AuthEntry, false), GuardOutcome::Allow);
}

#[test]
fn neutral_routes_are_always_allowed() {
    // Share links and the landing page stay reachable while logged in.
    assert_eq!(decide(RouteClass::Neutral, true), GuardOutcome::Allow);
    assert_eq!(decide(RouteClass::Neutral, false), GuardOutcome::Allow);
}

// =============================================================
// End-to-end guard: outside the browser the whoami refresh cannot
// succeed, so the guard must fail closed.
// =============================================================

fn test_session() -> AuthSession {
    AuthSession::new(HttpClient::new("http://localhost:8000"))
}

#[test]
fn unconfirmed_session_gates_protected_route() {
    let session = test_session();
    let outcome = futures::executor::block_on(guard(session, DASHBOARD));
    assert_eq!(outcome, GuardOutcome::Redirect(LOGIN));
}

#[test]
fn unconfirmed_session_still_reaches_login() {
    let session = test_session();
    let outcome = futures::executor::block_on(guard(session, LOGIN));
    assert_eq!(outcome, GuardOutcome::Allow);
}

#[test]
fn unconfirmed_session_still_reaches_share_link() {
    let session = test_session();
    let outcome = futures::executor::block_on(guard(session, "/share/abc123"));
    assert_eq!(outcome, GuardOutcome::Allow);
}

#[test]
fn guard_reads_state_settled_by_its_own_refresh() {
    let session = test_session();
    let outcome = futures::executor::block_on(guard(session, DASHBOARD));
    // The store reflects the refresh this guard invocation performed.
    assert!(!session.state().get_untracked().is_authenticated());
    assert_eq!(outcome, GuardOutcome::Redirect(LOGIN));
}
