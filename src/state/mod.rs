//! Shared application state.
//!
//! DESIGN
//! ======
//! The session is the only process-wide mutable state; list data for the
//! directory and offer pages stays local to the page that fetched it, so
//! nothing else can mutate what a page is rendering.

pub mod session;
