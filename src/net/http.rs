//! Shared HTTP transport for the backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! cookie included on every request. Server-side (SSR): stubs returning a
//! network error since the backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response is classified before it reaches the caller. A 401
//! from an endpoint outside the auth lifecycle means the backend session
//! disappeared mid-use; it becomes [`ApiError::SessionExpired`] and bumps the
//! session-expired counter observed at the application root. The transport
//! itself never navigates.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Paths carrying these segments are part of the authentication lifecycle.
/// A 401 from them is the normal "not logged in" signal, not a lost session,
/// so they are exempt from the forced-redirect behavior.
#[cfg(any(test, feature = "hydrate"))]
const AUTH_LIFECYCLE_PATHS: [&str; 4] = ["/login", "/register", "/logout", "/me"];

/// Failure outcome of one backend call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 from an endpoint outside the auth lifecycle: the backend session
    /// expired while the user was working.
    #[error("session expired")]
    SessionExpired,
    /// Any other non-2xx response, propagated unchanged.
    #[error("request to {path} failed with status {status}")]
    Status { status: u16, path: String },
    /// Connectivity or body-decoding failure.
    #[error("network error: {0}")]
    Network(String),
}

/// Backend origin, fixed at build time.
pub fn api_origin() -> &'static str {
    option_env!("MEDFOLIO_API_ORIGIN").unwrap_or("http://localhost:8000")
}

/// Whether `path` belongs to the authentication lifecycle exclusion set.
#[cfg(any(test, feature = "hydrate"))]
fn is_auth_lifecycle(path: &str) -> bool {
    AUTH_LIFECYCLE_PATHS.iter().any(|p| path.contains(p))
}

/// Map a non-2xx status to its failure outcome. Pure so the 401 policy can
/// be tested without a browser.
#[cfg(any(test, feature = "hydrate"))]
fn classify_failure(status: u16, path: &str) -> ApiError {
    if status == 401 && !is_auth_lifecycle(path) {
        ApiError::SessionExpired
    } else {
        ApiError::Status {
            status,
            path: path.to_owned(),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn join_url(origin: &str, path: &str) -> String {
    format!("{origin}{path}")
}

/// Shared transport handle. Configured once at application start and passed
/// around by copy; holds no mutable state beyond the session-expired counter.
#[derive(Clone, Copy)]
pub struct HttpClient {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    origin: &'static str,
    session_expired: RwSignal<u64>,
}

impl HttpClient {
    pub fn new(origin: &'static str) -> Self {
        Self {
            origin,
            session_expired: RwSignal::new(0),
        }
    }

    /// Monotonic counter bumped once per unexpected 401. The application
    /// root watches it and performs the redirect to the login route; see
    /// `SessionExpiryRedirect` in `app`.
    pub fn session_expired(&self) -> ReadSignal<u64> {
        self.session_expired.read_only()
    }

    /// Classify a non-2xx response and announce session expiry when the
    /// classification says so. The caller still receives the error.
    #[cfg(feature = "hydrate")]
    fn failure(&self, status: u16, path: &str) -> ApiError {
        let err = classify_failure(status, path);
        if err == ApiError::SessionExpired {
            leptos::logging::warn!("session expired during request to {path}");
            self.session_expired.update(|n| *n += 1);
        }
        err
    }

    /// GET `path` and deserialize the JSON body.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on any non-2xx response or
    /// transport failure. Never retries.
    pub async fn get_json<T: DeserializeOwned>(self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&join_url(self.origin, path))
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(self.failure(resp.status(), path));
            }
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }

    /// POST a JSON `body` to `path` and deserialize the JSON response.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on any non-2xx response or
    /// transport failure.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&join_url(self.origin, path))
                .credentials(web_sys::RequestCredentials::Include)
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(self.failure(resp.status(), path));
            }
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }

    /// POST to `path` with no body, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on any non-2xx response or
    /// transport failure.
    pub async fn post_empty(self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&join_url(self.origin, path))
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(self.failure(resp.status(), path));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
