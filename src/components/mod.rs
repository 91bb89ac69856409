//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and record presentation while reading
//! shared state from Leptos context providers; pages own orchestration.

pub mod navbar;
pub mod trend_badge;
