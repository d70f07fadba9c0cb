use super::*;
use crate::net::types::Business;

fn valid_fields() -> BusinessFormFields {
    BusinessFormFields {
        name: "Tortas Lupita".to_owned(),
        what_they_sell: "Tortas y aguas frescas".to_owned(),
        hours: "L-S 9:00-20:00".to_owned(),
        municipality: "uriangato".to_owned(),
        street_address: "Av. Juárez 12".to_owned(),
        location_type: "local_comercial".to_owned(),
        contact_phone: "445 123 4567".to_owned(),
        facebook: "tortaslupita".to_owned(),
        instagram: String::new(),
        tiktok: String::new(),
        business_type: "alimentos".to_owned(),
        logo: String::new(),
    }
}

#[test]
fn valid_form_produces_payload() {
    let payload = validate_business_form(&valid_fields()).expect("form should validate");
    assert_eq!(payload.name, "Tortas Lupita");
    assert_eq!(payload.municipality, "uriangato");
    assert_eq!(payload.contact_phone, "445 123 4567");
    assert_eq!(payload.logo, None);
}

#[test]
fn name_is_required() {
    let fields = BusinessFormFields {
        name: "  ".to_owned(),
        ..valid_fields()
    };
    assert_eq!(
        validate_business_form(&fields),
        Err("El nombre del negocio es obligatorio.")
    );
}

#[test]
fn municipality_and_location_type_are_required() {
    let fields = BusinessFormFields {
        municipality: String::new(),
        ..valid_fields()
    };
    assert_eq!(validate_business_form(&fields), Err("Selecciona un municipio."));

    let fields = BusinessFormFields {
        location_type: String::new(),
        ..valid_fields()
    };
    assert_eq!(
        validate_business_form(&fields),
        Err("Selecciona el tipo de ubicación.")
    );
}

#[test]
fn street_address_is_required() {
    let fields = BusinessFormFields {
        street_address: " ".to_owned(),
        ..valid_fields()
    };
    assert_eq!(validate_business_form(&fields), Err("La dirección es obligatoria."));
}

#[test]
fn phone_is_optional_but_must_have_ten_digits_when_present() {
    let fields = BusinessFormFields {
        contact_phone: String::new(),
        ..valid_fields()
    };
    assert!(validate_business_form(&fields).is_ok());

    let fields = BusinessFormFields {
        contact_phone: "12345".to_owned(),
        ..valid_fields()
    };
    assert_eq!(
        validate_business_form(&fields),
        Err("Ingresa un teléfono de al menos 10 dígitos.")
    );
}

#[test]
fn fields_round_trip_from_business() {
    let business = Business {
        id: 9,
        name: "Calzado Pérez".to_owned(),
        what_they_sell: Some("Zapatos de piel".to_owned()),
        hours: None,
        municipality: "moroleon".to_owned(),
        street_address: "Portal Allende 3".to_owned(),
        location_type: "puesto_fijo".to_owned(),
        contact_phone: None,
        social_media_facebook_username: Some("calzadoperez".to_owned()),
        social_media_instagram_username: None,
        social_media_tiktok_username: None,
        business_type: Some("calzado".to_owned()),
        logo: Some("https://cdn.example.mx/logo.png".to_owned()),
        is_paid_member: true,
    };
    let fields = BusinessFormFields::from_business(&business);
    assert_eq!(fields.name, "Calzado Pérez");
    assert_eq!(fields.hours, "");
    assert_eq!(fields.facebook, "calzadoperez");
    assert_eq!(fields.logo, "https://cdn.example.mx/logo.png");

    let payload = validate_business_form(&fields).expect("round-tripped form should validate");
    assert_eq!(payload.logo.as_deref(), Some("https://cdn.example.mx/logo.png"));
}
