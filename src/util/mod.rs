//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure derivations
//! from page and component logic to improve reuse and testability.

pub mod display;
pub mod redirect_token;
