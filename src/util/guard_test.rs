use super::*;
use crate::net::identity::AuthTokenError;
use crate::net::types::Identity;

fn signed_in(loading: bool) -> SessionState {
    let mut state = SessionState::default();
    let identity = Identity {
        uid: "u1".to_owned(),
        email: "u1@example.mx".to_owned(),
        display_name: None,
        email_verified: true,
    };
    let ticket = state.begin_session_change(Some(&identity)).expect("ticket");
    state.apply_claims(&ticket, identity, Err(AuthTokenError::Http(503)));
    state.loading = loading;
    state
}

fn signed_out(loading: bool) -> SessionState {
    let mut state = SessionState::default();
    state.loading = loading;
    state
}

#[test]
fn authenticated_only_is_pending_while_loading_regardless_of_identity() {
    assert_eq!(authenticated_only(&signed_out(true)), GuardDecision::Pending);
    assert_eq!(authenticated_only(&signed_in(true)), GuardDecision::Pending);
}

#[test]
fn authenticated_only_redirects_signed_out_to_public_entry() {
    assert_eq!(
        authenticated_only(&signed_out(false)),
        GuardDecision::Redirect(PUBLIC_ENTRY)
    );
}

#[test]
fn authenticated_only_allows_signed_in() {
    assert_eq!(authenticated_only(&signed_in(false)), GuardDecision::Allow);
}

#[test]
fn public_only_is_pending_while_loading_regardless_of_identity() {
    assert_eq!(public_only(&signed_out(true)), GuardDecision::Pending);
    assert_eq!(public_only(&signed_in(true)), GuardDecision::Pending);
}

#[test]
fn public_only_redirects_signed_in_to_landing() {
    assert_eq!(
        public_only(&signed_in(false)),
        GuardDecision::Redirect(AUTHENTICATED_LANDING)
    );
}

#[test]
fn public_only_allows_signed_out() {
    assert_eq!(public_only(&signed_out(false)), GuardDecision::Allow);
}

#[test]
fn guards_invert_allow_and_redirect_once_resolved() {
    // Once loading is resolved, the two guards must disagree on every
    // snapshot: one allows exactly when the other redirects.
    for state in [signed_in(false), signed_out(false)] {
        let protected = authenticated_only(&state);
        let public = public_only(&state);
        assert_eq!(protected == GuardDecision::Allow, matches!(public, GuardDecision::Redirect(_)));
        assert_eq!(public == GuardDecision::Allow, matches!(protected, GuardDecision::Redirect(_)));
    }
}
