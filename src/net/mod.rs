//! Networking modules for the backend HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the shared credentialed transport with failure classification,
//! `api` holds the endpoint helpers, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
