use super::*;
use crate::net::types::ListingFilters;

#[test]
fn businesses_url_without_filters_has_no_query() {
    assert_eq!(businesses_url(&ListingFilters::default()), "/api/businesses/");
}

#[test]
fn businesses_url_encodes_all_set_filters_in_order() {
    let filters = ListingFilters {
        search: "pan dulce".to_owned(),
        business_type: "alimentos".to_owned(),
        municipality: "moroleon".to_owned(),
    };
    assert_eq!(
        businesses_url(&filters),
        "/api/businesses/?search=pan%20dulce&business_type=alimentos&municipality=moroleon"
    );
}

#[test]
fn offers_url_skips_unset_filters() {
    let filters = ListingFilters {
        search: String::new(),
        business_type: String::new(),
        municipality: "uriangato".to_owned(),
    };
    assert_eq!(offers_url(&filters), "/api/offers/?municipality=uriangato");
}

#[test]
fn encode_component_escapes_reserved_and_non_ascii() {
    assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    assert_eq!(encode_component("café"), "caf%C3%A9");
    assert_eq!(encode_component("ok-._~"), "ok-._~");
}

#[test]
fn resource_urls_are_trailing_slashed() {
    assert_eq!(business_url(12), "/api/businesses/12/");
    assert_eq!(offer_url(5), "/api/offers/5/");
    assert_eq!(my_business_url(), "/api/businesses/my_business/");
    assert_eq!(my_offers_url(), "/api/offers/my_offers/");
    assert_eq!(municipalities_url(), "/api/businesses/municipalities/");
    assert_eq!(checkout_session_url(), "/api/create-checkout-session/");
}

#[test]
fn error_for_status_maps_auth_statuses_to_unauthorized() {
    assert_eq!(error_for_status(401, None), ApiError::Unauthorized);
    assert_eq!(error_for_status(403, Some("x".to_owned())), ApiError::Unauthorized);
}

#[test]
fn error_for_status_maps_not_found() {
    assert_eq!(error_for_status(404, None), ApiError::NotFound);
}

#[test]
fn error_for_status_prefers_backend_detail_for_validation() {
    assert_eq!(
        error_for_status(400, Some("La fecha de fin es inválida.".to_owned())),
        ApiError::Validation("La fecha de fin es inválida.".to_owned())
    );
    let ApiError::Validation(fallback) = error_for_status(422, None) else {
        panic!("expected validation error");
    };
    assert!(fallback.contains("rechazó"));
}

#[test]
fn error_for_status_keeps_other_statuses_opaque() {
    assert_eq!(error_for_status(500, None), ApiError::Http(500));
    assert_eq!(error_for_status(502, Some("x".to_owned())), ApiError::Http(502));
}

#[test]
fn needs_reauth_only_for_auth_errors() {
    assert!(ApiError::Unauthenticated.needs_reauth());
    assert!(ApiError::Unauthorized.needs_reauth());
    assert!(!ApiError::NotFound.needs_reauth());
    assert!(!ApiError::Http(500).needs_reauth());
    assert!(!ApiError::Validation("x".to_owned()).needs_reauth());
}

#[test]
fn listing_query_is_empty_for_default_filters() {
    assert_eq!(listing_query(&ListingFilters::default()), "");
}
