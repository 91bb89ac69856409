//! Session store: the single source of truth for "is this user logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once at application start and provided via context. The
//! navigation guard refreshes it on every route transition; user-aware
//! components read it for identity-dependent rendering.
//!
//! DESIGN
//! ======
//! Consumers get a read-only signal; the only mutation path is
//! [`AuthSession::check_auth`], which settles the state from a fresh whoami
//! round trip. Authentication is derived from the presence of the profile,
//! so a half-updated "authenticated but no user" state cannot exist.
//! Overlapping refreshes share one in-flight future instead of racing:
//! callers arriving while a check is pending await the same settled result.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use leptos::prelude::*;

use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::User;

type PendingCheck = Shared<LocalBoxFuture<'static, bool>>;

/// Snapshot of the session as of the last completed whoami refresh. May be
/// stale between refreshes; the guard always refreshes before reading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Profile of the signed-in user, present exactly when authenticated.
    pub user: Option<User>,
    /// Whether a whoami refresh is currently in flight.
    pub checking: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Apply the outcome of one whoami round trip.
    fn settle(&mut self, user: Option<User>) {
        self.user = user;
        self.checking = false;
    }
}

/// Owning handle for the session state, passed around by copy.
#[derive(Clone, Copy)]
pub struct AuthSession {
    http: HttpClient,
    state: RwSignal<AuthState>,
    pending: StoredValue<Option<PendingCheck>, LocalStorage>,
}

impl AuthSession {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            state: RwSignal::new(AuthState::default()),
            pending: StoredValue::new_local(None),
        }
    }

    /// Read-only view of the session state. All writes go through
    /// [`AuthSession::check_auth`].
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Refresh the session from the backend and report whether the user is
    /// authenticated afterwards.
    ///
    /// Every call reflects a real whoami round trip; there is no caching, so
    /// callers are expected to invoke this at navigation boundaries only.
    /// Failures are absorbed into the unauthenticated state. If a refresh is
    /// already pending, this awaits that refresh instead of starting another,
    /// so concurrent callers all observe the same settled result.
    pub async fn check_auth(self) -> bool {
        let fut = if let Some(pending) = self.pending.get_value() {
            pending
        } else {
            let http = self.http;
            let state = self.state;
            let slot = self.pending;
            state.update(|s| s.checking = true);
            let fut: PendingCheck = async move {
                let user = api::fetch_current_user(http).await;
                let authenticated = user.is_some();
                state.update(|s| s.settle(user));
                slot.set_value(None);
                authenticated
            }
            .boxed_local()
            .shared();
            self.pending.set_value(Some(fut.clone()));
            fut
        };
        fut.await
    }
}
