//! Networking modules for the identity backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam, `cookies` reads the anti-forgery cookie,
//! `api` layers credential interception and typed endpoints on top, and
//! `types` defines the wire schema.

pub mod api;
pub mod cookies;
pub mod transport;
pub mod types;
