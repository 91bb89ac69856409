//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page installs the guard on mount. The guard refreshes the session
//! store, then decides whether the navigation may proceed or must redirect.
//!
//! DESIGN
//! ======
//! Gating policy is fail-closed: any inability to confirm authentication
//! (including network failure during the whoami refresh) reads as "not
//! logged in", so protected routes redirect to the login page rather than
//! render. Classification and the decision rules are pure functions; the
//! async wrapper only sequences the refresh before the decision.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthSession;

pub const LANDING: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";
pub const SHARE_PREFIX: &str = "/share/";

/// How a route participates in session gating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Requires an authenticated session.
    Protected,
    /// Login/register entry points; already-authenticated users are bounced
    /// to the dashboard.
    AuthEntry,
    /// Reachable regardless of session state (landing, share links).
    Neutral,
}

/// Classify a target path. Unknown paths are neutral; the router's fallback
/// renders not-found for them and the guard never forces a redirect.
pub fn classify(path: &str) -> RouteClass {
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    match path {
        DASHBOARD => RouteClass::Protected,
        LOGIN | REGISTER => RouteClass::AuthEntry,
        _ => RouteClass::Neutral,
    }
}

/// Guard decision for one navigation event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Navigation proceeds unmodified.
    Allow,
    Redirect(&'static str),
}

/// Decide the outcome for a navigation given the freshly settled session
/// state. The protected-route check takes precedence over the auth-entry
/// bounce.
pub fn decide(class: RouteClass, authenticated: bool) -> GuardOutcome {
    match class {
        RouteClass::Protected if !authenticated => GuardOutcome::Redirect(LOGIN),
        RouteClass::AuthEntry if authenticated => GuardOutcome::Redirect(DASHBOARD),
        _ => GuardOutcome::Allow,
    }
}

/// Evaluate the guard for a navigation to `path`.
///
/// The session is refreshed first and the decision is made on the state
/// settled by this call's own await, never on a value read before it.
pub async fn guard(session: AuthSession, path: &str) -> GuardOutcome {
    let authenticated = session.check_auth().await;
    decide(classify(path), authenticated)
}

/// Install the navigation guard on a page: runs the guard once on mount and
/// applies a redirect outcome through the router's `navigate` handle.
pub fn install_guard<F>(session: AuthSession, path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let navigate = navigate.clone();
        let path = path.clone();
        leptos::task::spawn_local(async move {
            match guard(session, &path).await {
                GuardOutcome::Allow => {}
                GuardOutcome::Redirect(target) => navigate(target, NavigateOptions::default()),
            }
        });
    });
}
