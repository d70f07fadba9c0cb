use super::*;

#[test]
fn offer_deserializes_with_embedded_business() {
    let json = serde_json::json!({
        "id": 7,
        "title": "2x1 en tortas",
        "description": "Todos los martes",
        "original_price": "80.00",
        "discount_price": "40.00",
        "image": null,
        "start_date": "2025-07-01",
        "end_date": "2025-07-31",
        "is_active": true,
        "business": { "id": 3, "name": "Tortas Lupita", "is_paid_member": true }
    });
    let offer: Offer = serde_json::from_value(json).expect("offer should deserialize");
    assert_eq!(offer.id, 7);
    assert_eq!(offer.business.as_ref().map(|b| b.id), Some(3));
    assert!(offer.is_active);
}

#[test]
fn offer_tolerates_missing_optional_fields() {
    let json = serde_json::json!({
        "id": 1,
        "title": "Oferta",
        "description": null,
        "original_price": null,
        "discount_price": "10.00",
        "image": null,
        "start_date": "2025-01-01",
        "end_date": "2025-01-02",
        "business": null
    });
    let offer: Offer = serde_json::from_value(json).expect("offer should deserialize");
    assert!(!offer.is_active);
    assert!(offer.business.is_none());
}

#[test]
fn identity_email_verified_defaults_false() {
    let json = serde_json::json!({
        "uid": "u1",
        "email": "a@b.mx",
        "display_name": null
    });
    let identity: Identity = serde_json::from_value(json).expect("identity should deserialize");
    assert!(!identity.email_verified);
}

#[test]
fn business_summary_keeps_paid_flag() {
    let business = Business {
        id: 4,
        name: "Calzado Pérez".to_owned(),
        what_they_sell: None,
        hours: None,
        municipality: "uriangato".to_owned(),
        street_address: "Av. Juárez 12".to_owned(),
        location_type: "local_comercial".to_owned(),
        contact_phone: None,
        social_media_facebook_username: None,
        social_media_instagram_username: None,
        social_media_tiktok_username: None,
        business_type: Some("calzado".to_owned()),
        logo: None,
        is_paid_member: true,
    };
    let summary = business.summary();
    assert_eq!(summary.id, 4);
    assert!(summary.is_paid_member);
}

#[test]
fn filters_from_pairs_ignores_unknown_keys() {
    let filters = ListingFilters::from_pairs([
        ("search", "tortas"),
        ("page", "2"),
        ("municipality", "moroleon"),
    ]);
    assert_eq!(filters.search, "tortas");
    assert_eq!(filters.municipality, "moroleon");
    assert_eq!(filters.business_type, "");
}

#[test]
fn filters_pairs_skip_empty_fields() {
    let filters = ListingFilters {
        search: String::new(),
        business_type: "alimentos".to_owned(),
        municipality: String::new(),
    };
    assert_eq!(filters.pairs(), vec![("business_type", "alimentos")]);
}

#[test]
fn filters_is_empty_only_when_all_unset() {
    assert!(ListingFilters::default().is_empty());
    let filters = ListingFilters {
        search: "x".to_owned(),
        ..ListingFilters::default()
    };
    assert!(!filters.is_empty());
}
