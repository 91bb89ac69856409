//! REST API helpers for the backend endpoints.
//!
//! Thin free functions over [`HttpClient`] so call sites never build URLs or
//! payloads by hand. All failure classification lives in `http`; helpers
//! here either propagate the classified error or, for the whoami check,
//! swallow it as the expected "not logged in" signal.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::json;

use super::http::{ApiError, HttpClient};
use super::types::{
    Allergy, AuthAck, DashboardSummary, HealthData, LabResult, Medication, SharedRecords, User,
    Vaccine,
};

fn share_endpoint(code: &str) -> String {
    format!("/share/{code}")
}

fn login_payload(email: &str, password: &str) -> serde_json::Value {
    json!({ "email": email, "password": password })
}

fn register_payload(name: &str, email: &str, password: &str) -> serde_json::Value {
    json!({ "name": name, "email": email, "password": password })
}

/// Fetch the currently authenticated user from `/me`.
///
/// Returns `None` on any failure: a 401 here is the normal unauthenticated
/// signal, and network errors deliberately read as "cannot confirm", so the
/// session store fails closed.
pub async fn fetch_current_user(http: HttpClient) -> Option<User> {
    match http.get_json::<User>("/me").await {
        Ok(user) => Some(user),
        Err(err) => {
            log::debug!("whoami reported unauthenticated: {err}");
            None
        }
    }
}

/// Log in with email and password via `POST /login`. The backend sets the
/// session cookie on success.
///
/// # Errors
///
/// Returns the classified [`ApiError`] when the credentials are rejected or
/// the request fails.
pub async fn login(http: HttpClient, email: &str, password: &str) -> Result<AuthAck, ApiError> {
    http.post_json("/login", &login_payload(email, password)).await
}

/// Create an account via `POST /register`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] when registration is rejected or the
/// request fails.
pub async fn register(
    http: HttpClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthAck, ApiError> {
    http.post_json("/register", &register_payload(name, email, password))
        .await
}

/// End the backend session via `POST /logout`. Failures are ignored; the
/// follow-up whoami refresh settles the client state either way.
pub async fn logout(http: HttpClient) {
    let _ = http.post_empty("/logout").await;
}

/// Fetch all vaccination records via `GET /vaccines`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn fetch_vaccines(http: HttpClient) -> Result<Vec<Vaccine>, ApiError> {
    http.get_json("/vaccines").await
}

/// Fetch all medication records via `GET /medications`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn fetch_medications(http: HttpClient) -> Result<Vec<Medication>, ApiError> {
    http.get_json("/medications").await
}

/// Fetch all allergy records via `GET /allergies`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn fetch_allergies(http: HttpClient) -> Result<Vec<Allergy>, ApiError> {
    http.get_json("/allergies").await
}

/// Fetch all vital-sign samples via `GET /healthdata`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn fetch_healthdata(http: HttpClient) -> Result<Vec<HealthData>, ApiError> {
    http.get_json("/healthdata").await
}

/// Fetch all lab results via `GET /labresults`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn fetch_lab_results(http: HttpClient) -> Result<Vec<LabResult>, ApiError> {
    http.get_json("/labresults").await
}

/// Fetch the dashboard summary via `GET /dashboard`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn fetch_dashboard(http: HttpClient) -> Result<DashboardSummary, ApiError> {
    http.get_json("/dashboard").await
}

/// Fetch the records behind a share code via `GET /share/{code}`. Works
/// without a session; share links are reachable regardless of auth state.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure (including an expired or
/// unknown code).
pub async fn fetch_shared_records(
    http: HttpClient,
    code: &str,
) -> Result<SharedRecords, ApiError> {
    http.get_json(&share_endpoint(code)).await
}
