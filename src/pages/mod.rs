//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page installs the navigation guard on mount, owns route-scoped
//! orchestration, and delegates rendering details to `components`.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod register;
pub mod share;
