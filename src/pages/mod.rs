//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates the request and
//! session logic to `state`.

pub mod auth_complete;
pub mod home;
pub mod login;
pub mod register;
