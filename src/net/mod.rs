//! Networking modules for the backend REST API and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the marketplace backend with bearer tokens, `identity`
//! wraps the external identity provider, `session_sync` turns provider
//! events into session-store transitions, and `types` defines the shared
//! wire schema.

pub mod api;
pub mod identity;
pub mod session_sync;
pub mod types;
