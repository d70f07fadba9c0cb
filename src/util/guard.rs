//! Route guards over the session snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior for protected and
//! public-only screens. Both guards are three-valued: while the initial
//! identity resolution is pending they return [`GuardDecision::Pending`]
//! so a returning, still-valid session is never bounced to the sign-in
//! screen by a race with the identity provider.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Where unauthenticated users land: the sign-in/sign-up screen.
pub const PUBLIC_ENTRY: &str = "/";

/// Where already-signed-in users land when they hit a public-only route.
pub const AUTHENTICATED_LANDING: &str = "/dashboard/home";

/// Outcome of a guard check for the current session snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity resolution still pending: render a placeholder, do not
    /// redirect yet.
    Pending,
    /// The guarded content may render.
    Allow,
    /// Navigate to the given route instead of rendering.
    Redirect(&'static str),
}

/// Guard for routes that require a signed-in user.
pub fn authenticated_only(session: &SessionState) -> GuardDecision {
    if session.loading {
        return GuardDecision::Pending;
    }
    if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(PUBLIC_ENTRY)
    }
}

/// Guard for routes that only make sense signed out (sign-in/sign-up).
pub fn public_only(session: &SessionState) -> GuardDecision {
    if session.loading {
        return GuardDecision::Pending;
    }
    if session.is_authenticated() {
        GuardDecision::Redirect(AUTHENTICATED_LANDING)
    } else {
        GuardDecision::Allow
    }
}

/// Reactively apply a guard inside a route component: navigates whenever
/// the decision for the current snapshot is a redirect.
pub fn install_guard<F>(
    session: RwSignal<SessionState>,
    decide: fn(&SessionState) -> GuardDecision,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decide(&session.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
