//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure data shaping (`dates`, `trends`) and browser/environment concerns
//! (`dark_mode`) live here so page logic stays declarative.

pub mod dark_mode;
pub mod dates;
pub mod trends;
