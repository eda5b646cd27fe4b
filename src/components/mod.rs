//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the session chrome and the protected-route boundary while
//! reading and writing the shared session state from Leptos context.

pub mod avatar;
pub mod header;
pub mod protected_route;
