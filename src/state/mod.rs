//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models:
//! `session_store` persists the token, `auth` mirrors it reactively, `guard`
//! decides protected rendering, `lifecycle` ends sessions, and `sign_in`
//! starts them.

pub mod auth;
pub mod guard;
pub mod lifecycle;
pub mod session_store;
pub mod sign_in;
