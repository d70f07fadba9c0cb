//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render marketplace cards, the shared filter bar, and the
//! re-authentication prompt while reading session state from Leptos context
//! providers.

pub mod business_card;
pub mod filter_bar;
pub mod offer_card;
pub mod reauth_prompt;
