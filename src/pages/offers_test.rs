use super::*;

use leptos_router::params::ParamsMap;

use crate::net::identity::TokenInfo;
use crate::net::types::Identity;
use crate::state::session::SessionState;

fn owner_state(is_owner: bool) -> SessionState {
    let mut state = SessionState::default();
    let identity = Identity {
        uid: "u1".to_owned(),
        email: "u1@example.mx".to_owned(),
        display_name: None,
        email_verified: true,
    };
    let ticket = state.begin_session_change(Some(&identity)).expect("ticket");
    let token = TokenInfo {
        id_token: "tok".to_owned(),
        claims: serde_json::json!({ "isBusinessOwner": is_owner }),
        email_verified: true,
    };
    state.apply_claims(&ticket, identity, Ok(token));
    state
}

#[test]
fn create_button_requires_owner_claim_and_registered_business() {
    assert!(can_create_offers(&owner_state(true), true));
    assert!(!can_create_offers(&owner_state(true), false));
    assert!(!can_create_offers(&owner_state(false), true));
    assert!(!can_create_offers(&SessionState::default(), true));
}

#[test]
fn filters_from_query_reads_known_keys() {
    let mut query = ParamsMap::new();
    query.insert("search", "tortas".to_owned());
    query.insert("municipality", "yuriria".to_owned());
    let filters = filters_from_query(&query);
    assert_eq!(filters.search, "tortas");
    assert_eq!(filters.municipality, "yuriria");
    assert_eq!(filters.business_type, "");
}
