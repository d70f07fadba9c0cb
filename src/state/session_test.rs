use super::*;

use crate::net::identity::{AuthTokenError, TokenInfo};
use crate::net::types::{BusinessSummary, Identity};

fn identity(uid: &str) -> Identity {
    Identity {
        uid: uid.to_owned(),
        email: format!("{uid}@example.mx"),
        display_name: None,
        email_verified: true,
    }
}

fn token(owner: bool, subscription: bool) -> TokenInfo {
    TokenInfo {
        id_token: "tok".to_owned(),
        claims: serde_json::json!({
            "isBusinessOwner": owner,
            "hasActiveSubscription": subscription,
        }),
        email_verified: true,
    }
}

fn fetch_failed() -> AuthTokenError {
    AuthTokenError::Network("connection reset".to_owned())
}

fn summary() -> BusinessSummary {
    BusinessSummary {
        id: 1,
        name: "Tortas Lupita".to_owned(),
        is_paid_member: true,
    }
}

#[test]
fn starts_loading_signed_out() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert!(!state.is_business_owner);
    assert!(!state.has_active_subscription);
}

#[test]
fn is_authenticated_tracks_identity_presence() {
    let mut state = SessionState::default();
    assert!(!state.is_authenticated());

    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.apply_claims(&ticket, identity("u1"), Ok(token(false, false)));
    assert!(state.is_authenticated());

    state.begin_session_change(None);
    assert!(!state.is_authenticated());
}

#[test]
fn absent_identity_resolves_initial_load() {
    let mut state = SessionState::default();
    assert!(state.begin_session_change(None).is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn successful_claims_fetch_sets_derived_state() {
    let mut state = SessionState::default();
    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.apply_claims(&ticket, identity("u1"), Ok(token(true, true)));

    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert!(state.email_verified);
    assert!(state.is_business_owner);
    assert!(state.has_active_subscription);
}

#[test]
fn claims_fetch_failure_is_fail_closed_but_still_authenticated() {
    let mut state = SessionState::default();
    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.apply_claims(&ticket, identity("u1"), Err(fetch_failed()));

    assert!(state.is_authenticated());
    assert!(!state.is_business_owner);
    assert!(!state.has_active_subscription);
    assert!(!state.loading);
}

#[test]
fn non_boolean_claims_never_authorize() {
    let mut state = SessionState::default();
    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    let token = TokenInfo {
        id_token: "tok".to_owned(),
        claims: serde_json::json!({
            "isBusinessOwner": "true",
            "hasActiveSubscription": 1,
        }),
        email_verified: true,
    };
    state.apply_claims(&ticket, identity("u1"), Ok(token));

    assert!(!state.is_business_owner);
    assert!(!state.has_active_subscription);
}

#[test]
fn loading_resolves_exactly_once_across_session_cycles() {
    let mut state = SessionState::default();
    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.apply_claims(&ticket, identity("u1"), Ok(token(true, false)));
    assert!(!state.loading);

    // Sign out, sign back in, clear explicitly: loading must stay false
    // through the whole run, including the window while claims resolve.
    state.begin_session_change(None);
    assert!(!state.loading);

    let ticket = state.begin_session_change(Some(&identity("u2"))).expect("ticket");
    assert!(!state.loading);
    state.apply_claims(&ticket, identity("u2"), Ok(token(false, false)));
    assert!(!state.loading);

    state.clear();
    assert!(!state.loading);
}

#[test]
fn loading_stays_true_until_first_resolution() {
    let mut state = SessionState::default();
    let _ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    // The very first resolution is still in flight.
    assert!(state.loading);
}

#[test]
fn later_event_wins_even_when_its_fetch_resolves_first() {
    let mut state = SessionState::default();
    let ticket_a = state.begin_session_change(Some(&identity("a"))).expect("ticket");
    let ticket_b = state.begin_session_change(Some(&identity("b"))).expect("ticket");

    // B's fetch lands first, then A's stale result arrives.
    state.apply_claims(&ticket_b, identity("b"), Ok(token(true, true)));
    state.apply_claims(&ticket_a, identity("a"), Ok(token(false, false)));

    assert_eq!(state.identity.as_ref().map(|i| i.uid.as_str()), Some("b"));
    assert!(state.is_business_owner);
    assert!(state.has_active_subscription);
}

#[test]
fn sign_out_discards_in_flight_claims_fetch() {
    let mut state = SessionState::default();
    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.begin_session_change(None);

    // A late success for the superseded identity must not resurrect it.
    state.apply_claims(&ticket, identity("u1"), Ok(token(true, true)));
    assert!(!state.is_authenticated());
    assert!(!state.is_business_owner);
    assert!(!state.has_active_subscription);
}

#[test]
fn explicit_clear_discards_in_flight_claims_fetch() {
    let mut state = SessionState::default();
    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.clear();
    state.apply_claims(&ticket, identity("u1"), Ok(token(true, true)));
    assert!(!state.is_authenticated());
}

#[test]
fn signed_out_reset_is_atomic() {
    let mut state = SessionState::default();
    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.apply_claims(&ticket, identity("u1"), Ok(token(true, true)));
    state.set_business_info(Some(summary()));

    state.begin_session_change(None);
    assert!(!state.is_authenticated());
    assert!(!state.email_verified);
    assert!(!state.is_business_owner);
    assert!(!state.has_active_subscription);
    assert!(state.business_info.is_none());
}

#[test]
fn optimistic_subscription_is_visible_immediately() {
    let mut state = SessionState::default();
    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.apply_claims(&ticket, identity("u1"), Ok(token(true, false)));

    state.set_subscription_status(true);
    assert!(state.has_active_subscription);
}

#[test]
fn fresh_claims_override_optimistic_subscription() {
    let mut state = SessionState::default();
    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.apply_claims(&ticket, identity("u1"), Ok(token(true, false)));
    state.set_subscription_status(true);

    // The backend never confirmed the payment: the next natural refresh
    // still says false and wins.
    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.apply_claims(&ticket, identity("u1"), Ok(token(true, false)));
    assert!(!state.has_active_subscription);
}

#[test]
fn claims_failure_after_authorized_session_drops_to_fail_closed() {
    let mut state = SessionState::default();
    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.apply_claims(&ticket, identity("u1"), Ok(token(true, true)));

    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.apply_claims(&ticket, identity("u1"), Err(fetch_failed()));

    assert!(state.is_authenticated());
    assert!(!state.is_business_owner);
    assert!(!state.has_active_subscription);
}

#[test]
fn stale_but_available_during_re_resolution() {
    let mut state = SessionState::default();
    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.apply_claims(&ticket, identity("u1"), Ok(token(true, true)));

    // A new refresh for the same identity is in flight: the prior derived
    // state stays visible instead of blanking out.
    let _pending = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    assert!(state.is_authenticated());
    assert!(state.is_business_owner);
    assert!(!state.loading);
}

#[test]
fn business_info_is_explicit_not_derived() {
    let mut state = SessionState::default();
    let ticket = state.begin_session_change(Some(&identity("u1"))).expect("ticket");
    state.apply_claims(&ticket, identity("u1"), Ok(token(true, true)));
    assert!(state.business_info.is_none());

    state.set_business_info(Some(summary()));
    assert_eq!(state.business_info.as_ref().map(|b| b.id), Some(1));

    state.set_business_info(None);
    assert!(state.business_info.is_none());
}
