use super::*;

fn sample_user() -> User {
    User {
        id: "7c9e6679-7425-40de-944b-e07fc1f90ae7".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
    }
}

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.user, None);
    assert!(!state.checking);
}

#[test]
fn settle_with_profile_authenticates() {
    let mut state = AuthState::default();
    state.checking = true;
    state.settle(Some(sample_user()));
    assert!(state.is_authenticated());
    assert!(!state.checking);
}

#[test]
fn settle_without_profile_clears_everything() {
    let mut state = AuthState {
        user: Some(sample_user()),
        checking: true,
    };
    state.settle(None);
    assert!(!state.is_authenticated());
    assert_eq!(state.user, None);
    assert!(!state.checking);
}

#[test]
fn authentication_is_derived_from_profile_presence() {
    // There is no separate flag to fall out of sync with the profile.
    let mut state = AuthState::default();
    state.settle(Some(sample_user()));
    assert_eq!(state.is_authenticated(), state.user.is_some());
    state.settle(None);
    assert_eq!(state.is_authenticated(), state.user.is_some());
}

// =============================================================
// check_auth (outside the browser the whoami call always fails,
// which must read as "not authenticated")
// =============================================================

fn test_session() -> AuthSession {
    AuthSession::new(HttpClient::new("http://localhost:8000"))
}

#[test]
fn check_auth_fails_closed_without_backend() {
    let session = test_session();
    let authenticated = futures::executor::block_on(session.check_auth());
    assert!(!authenticated);
    assert!(!session.state().get_untracked().is_authenticated());
}

#[test]
fn check_auth_is_idempotent_across_sequential_calls() {
    let session = test_session();
    let first = futures::executor::block_on(session.check_auth());
    let second = futures::executor::block_on(session.check_auth());
    assert_eq!(first, second);
    assert_eq!(session.state().get_untracked(), AuthState::default());
}

#[test]
fn concurrent_checks_share_one_settled_result() {
    let session = test_session();
    let (first, second) =
        futures::executor::block_on(futures::future::join(session.check_auth(), session.check_auth()));
    assert_eq!(first, second);
    // The shared refresh released its slot once settled.
    assert!(session.pending.get_value().is_none());
    assert!(!session.state().get_untracked().checking);
}
